//! Contact store and navigation for the contact book.
//!
//! - [`ContactStore`] owns the draft form, the saved contacts, and the
//!   current selection, and publishes a [`StoreEvent`] for every change.
//! - [`Navigator`] receives screen changes from the store; [`RouteStack`]
//!   is the implementation used by the terminal UI.
//! - [`App`] is the view model the TUI renders from and sends commands to.

mod app;
mod navigation;
mod store;

pub use app::App;
pub use navigation::{Navigator, RouteStack};
pub use store::{ContactStore, SaveError, SelectError, StoreEvent};

pub use contacts_types::{
    Contact, ContactForm, ContactIndex, FormField, NavRequest, Route, SubscriptionId,
    ValidationAlert,
    ui::{AnimPhase, DraftInput, ModalEffect, ModalEffectKind, UiOptions},
};
