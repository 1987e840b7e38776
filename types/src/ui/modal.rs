//! Modal animation effects for TUI overlays.

use std::time::Duration;

use super::animation::{AnimPhase, EffectTimer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEffectKind {
    Shake,
}

#[derive(Debug, Clone)]
pub struct ModalEffect {
    kind: ModalEffectKind,
    timer: EffectTimer,
}

impl ModalEffect {
    #[must_use]
    pub fn shake(duration: Duration) -> Self {
        Self {
            kind: ModalEffectKind::Shake,
            timer: EffectTimer::new(duration),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        self.timer.phase()
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        self.timer.progress()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }

    #[must_use]
    pub fn kind(&self) -> ModalEffectKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::{AnimPhase, ModalEffect, ModalEffectKind};
    use std::time::Duration;

    #[test]
    fn shake_initial_state() {
        let effect = ModalEffect::shake(Duration::from_millis(250));
        assert_eq!(effect.kind(), ModalEffectKind::Shake);
        assert!(matches!(effect.phase(), AnimPhase::Running { progress } if progress < 0.1));
    }

    #[test]
    fn advance_keeps_running() {
        let mut effect = ModalEffect::shake(Duration::from_millis(200));
        effect.advance(Duration::from_millis(100));
        assert!(matches!(effect.phase(), AnimPhase::Running { .. }));
        assert!(!effect.is_finished());
    }

    #[test]
    fn completed_after_duration() {
        let mut effect = ModalEffect::shake(Duration::from_millis(100));
        effect.advance(Duration::from_millis(150));
        assert!(matches!(effect.phase(), AnimPhase::Completed));
        assert!(effect.is_finished());
    }

    #[test]
    fn zero_duration_immediately_completed() {
        let effect = ModalEffect::shake(Duration::ZERO);
        assert!(matches!(effect.phase(), AnimPhase::Completed));
    }
}
