//! UI state types for the TUI layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.
//! Used by both the engine (state ownership) and tui (rendering/input).

mod animation;
mod input;
mod modal;
mod options;

pub use animation::AnimPhase;
pub use input::DraftInput;
pub use modal::{ModalEffect, ModalEffectKind};
pub use options::UiOptions;
