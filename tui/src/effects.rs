//! Modal animation effects for TUI overlays.

use ratatui::layout::Rect;

use contacts_engine::{ModalEffect, ModalEffectKind};

/// Apply a modal effect to transform the base rectangle.
#[must_use]
pub fn apply_modal_effect(effect: &ModalEffect, base: Rect, viewport: Rect) -> Rect {
    match effect.kind() {
        ModalEffectKind::Shake => {
            let t = effect.progress().clamp(0.0, 1.0);
            let decay = 1.0 - t;
            let oscillations = 4.0;
            let amplitude = 3.0;
            let offset = (f32::sin(t * std::f32::consts::TAU * oscillations) * amplitude * decay)
                .round() as i32;
            let viewport_left = i32::from(viewport.x);
            let viewport_right = i32::from(viewport.x) + i32::from(viewport.width);
            let max_x = (viewport_right - i32::from(base.width)).max(viewport_left);
            let base_x = i32::from(base.x);
            let x = (base_x + offset).clamp(viewport_left, max_x) as u16;
            Rect { x, ..base }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ratatui::layout::Rect;

    use contacts_engine::ModalEffect;

    use super::apply_modal_effect;

    const VIEWPORT: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };
    const BASE: Rect = Rect {
        x: 20,
        y: 8,
        width: 40,
        height: 7,
    };

    #[test]
    fn finished_shake_returns_base() {
        let mut effect = ModalEffect::shake(Duration::from_millis(100));
        effect.advance(Duration::from_millis(200));
        assert_eq!(apply_modal_effect(&effect, BASE, VIEWPORT), BASE);
    }

    #[test]
    fn shake_only_moves_horizontally_within_viewport() {
        let mut effect = ModalEffect::shake(Duration::from_millis(400));
        for _ in 0..8 {
            effect.advance(Duration::from_millis(30));
            let rect = apply_modal_effect(&effect, BASE, VIEWPORT);
            assert_eq!(rect.y, BASE.y);
            assert_eq!(rect.width, BASE.width);
            assert!(rect.x + rect.width <= VIEWPORT.width);
        }
    }
}
