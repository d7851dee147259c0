//! Retrigger suppression for mechanical button inputs.

use crate::axis::AxisId;

/// Default cooldown window between accepted presses of one button, in
/// milliseconds.
pub const DEBOUNCE_WINDOW_MS: u64 = 200;

/// Per-button debounce table.
///
/// Keeps the timestamp of the last accepted press for every identity
/// and rejects retriggers that land inside the cooldown window. The
/// table is keyed by [`AxisId`], so every button shares one window
/// value but tracks its own cooldown independently.
pub struct Debouncer {
    window_ms: u64,
    last_accept: [Option<u64>; AxisId::COUNT],
}

impl Debouncer {
    /// A debouncer with the default 200 ms window.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_window(DEBOUNCE_WINDOW_MS)
    }

    /// A debouncer with a custom window.
    #[must_use]
    pub const fn with_window(window_ms: u64) -> Self {
        Self {
            window_ms,
            last_accept: [None; AxisId::COUNT],
        }
    }

    /// Record a raw press of `axis` observed at `now_ms` (monotonic
    /// milliseconds).
    ///
    /// Returns `true` when the press is accepted: the first press ever
    /// seen for the button, or one whose elapsed time since the last
    /// accepted press strictly exceeds the window. Acceptance stamps
    /// the table. Retriggers inside the window and identities that are
    /// not buttons return `false` with no side effect.
    pub fn accept(&mut self, axis: AxisId, now_ms: u64) -> bool {
        if !axis.is_button() {
            return false;
        }

        let slot = &mut self.last_accept[axis.as_u8() as usize];
        match *slot {
            Some(last) if now_ms.saturating_sub(last) <= self.window_ms => false,
            _ => {
                *slot = Some(now_ms);
                true
            }
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_press_always_accepted() {
        let mut debouncer = Debouncer::new();
        // Even a press at t=0 counts.
        assert!(debouncer.accept(AxisId::ButtonB, 0));
    }

    #[test]
    fn test_presses_outside_window_all_accepted() {
        let mut debouncer = Debouncer::new();
        for t in [0, 201, 402, 1000] {
            assert!(debouncer.accept(AxisId::ButtonA, t), "press at {t} ms");
        }
    }

    #[test]
    fn test_retrigger_inside_window_rejected() {
        let mut debouncer = Debouncer::new();
        assert!(debouncer.accept(AxisId::ButtonX, 1000));
        assert!(!debouncer.accept(AxisId::ButtonX, 1050));
        assert!(!debouncer.accept(AxisId::ButtonX, 1199));
    }

    #[test]
    fn test_window_boundary_is_exclusive() {
        let mut debouncer = Debouncer::new();
        assert!(debouncer.accept(AxisId::ButtonY, 0));
        // Exactly 200 ms elapsed is still inside the window.
        assert!(!debouncer.accept(AxisId::ButtonY, 200));
        assert!(debouncer.accept(AxisId::ButtonY, 201));
    }

    #[test]
    fn test_rejection_does_not_extend_cooldown() {
        let mut debouncer = Debouncer::new();
        assert!(debouncer.accept(AxisId::TriggerRight, 0));
        assert!(!debouncer.accept(AxisId::TriggerRight, 150));
        // Cooldown still counts from the accepted press at t=0.
        assert!(debouncer.accept(AxisId::TriggerRight, 250));
    }

    #[test]
    fn test_buttons_debounce_independently() {
        let mut debouncer = Debouncer::new();
        assert!(debouncer.accept(AxisId::ButtonB, 100));
        assert!(debouncer.accept(AxisId::ButtonY, 110));
        assert!(debouncer.accept(AxisId::LeftStickClick, 120));
        assert!(!debouncer.accept(AxisId::ButtonB, 150));
    }

    #[test]
    fn test_stick_axes_never_accepted() {
        let mut debouncer = Debouncer::new();
        assert!(!debouncer.accept(AxisId::RightStickX, 1000));
        assert!(!debouncer.accept(AxisId::LeftStickY, 2000));
    }

    #[test]
    fn test_custom_window() {
        let mut debouncer = Debouncer::with_window(50);
        assert!(debouncer.accept(AxisId::ButtonA, 0));
        assert!(!debouncer.accept(AxisId::ButtonA, 50));
        assert!(debouncer.accept(AxisId::ButtonA, 51));
    }
}
