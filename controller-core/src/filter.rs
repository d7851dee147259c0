//! Dead-zone and change-detection policy for joystick samples.

use crate::axis::{AxisId, InputEvent};

/// Dead-zone threshold of the right stick filter.
pub const RIGHT_DEAD_ZONE: i16 = 30;

/// Dead-zone threshold of the left stick filter. Intentionally wider
/// than the right one.
pub const LEFT_DEAD_ZONE: i16 = 42;

/// Per-stick filter suppressing noise and redundant transmissions.
///
/// Each instance owns the last-sent value of its two axes and never
/// shares it. A raw sample produces at most one output event:
///
/// - outside the dead zone and different from the last sent value:
///   the sample itself;
/// - inside the dead zone while the last sent value was nonzero:
///   a single zero "re-centered" event;
/// - anything else: nothing.
///
/// Samples carrying an axis this instance does not own are ignored.
pub struct AxisFilter {
    x_axis: AxisId,
    y_axis: AxisId,
    threshold: i16,
    last_x: i16,
    last_y: i16,
}

impl AxisFilter {
    #[must_use]
    pub const fn new(x_axis: AxisId, y_axis: AxisId, threshold: i16) -> Self {
        Self {
            x_axis,
            y_axis,
            threshold,
            last_x: 0,
            last_y: 0,
        }
    }

    /// The right-stick instance (axes 6/7, threshold 30).
    #[must_use]
    pub const fn right() -> Self {
        Self::new(AxisId::RightStickX, AxisId::RightStickY, RIGHT_DEAD_ZONE)
    }

    /// The left-stick instance (axes 8/9, threshold 42).
    #[must_use]
    pub const fn left() -> Self {
        Self::new(AxisId::LeftStickX, AxisId::LeftStickY, LEFT_DEAD_ZONE)
    }

    /// Run one raw sample through the filter, returning the event to
    /// transmit, if any.
    pub fn push(&mut self, sample: InputEvent) -> Option<InputEvent> {
        let last = if sample.axis == self.x_axis {
            &mut self.last_x
        } else if sample.axis == self.y_axis {
            &mut self.last_y
        } else {
            return None;
        };

        if sample.value.abs() > self.threshold {
            if sample.value != *last {
                *last = sample.value;
                return Some(sample);
            }
        } else if *last != 0 {
            *last = 0;
            return Some(InputEvent::new(sample.axis, 0));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(axis: AxisId, value: i16) -> InputEvent {
        InputEvent::new(axis, value)
    }

    #[test]
    fn test_deflection_outside_dead_zone_is_forwarded() {
        let mut filter = AxisFilter::right();
        let event = filter.push(sample(AxisId::RightStickX, 100));
        assert_eq!(event, Some(sample(AxisId::RightStickX, 100)));
    }

    #[test]
    fn test_repeated_value_is_suppressed() {
        let mut filter = AxisFilter::right();
        assert!(filter.push(sample(AxisId::RightStickX, 100)).is_some());
        assert_eq!(filter.push(sample(AxisId::RightStickX, 100)), None);
        assert_eq!(filter.push(sample(AxisId::RightStickX, 100)), None);
        // A new value passes again.
        assert!(filter.push(sample(AxisId::RightStickX, 120)).is_some());
    }

    #[test]
    fn test_single_zero_event_per_dead_zone_entry() {
        let mut filter = AxisFilter::right();
        assert!(filter.push(sample(AxisId::RightStickX, 200)).is_some());

        // Crossing into the dead zone emits exactly one zero event.
        assert_eq!(
            filter.push(sample(AxisId::RightStickX, 10)),
            Some(sample(AxisId::RightStickX, 0))
        );

        // Staying inside it stays silent.
        assert_eq!(filter.push(sample(AxisId::RightStickX, 5)), None);
        assert_eq!(filter.push(sample(AxisId::RightStickX, -12)), None);
    }

    #[test]
    fn test_centered_stick_stays_silent() {
        let mut filter = AxisFilter::right();
        // Never deflected: center readings produce nothing at all.
        assert_eq!(filter.push(sample(AxisId::RightStickY, 0)), None);
        assert_eq!(filter.push(sample(AxisId::RightStickY, 3)), None);
    }

    #[test]
    fn test_right_threshold_boundary() {
        let mut filter = AxisFilter::right();
        // |30| is inside the dead zone, |31| is outside.
        assert_eq!(filter.push(sample(AxisId::RightStickX, 30)), None);
        assert_eq!(filter.push(sample(AxisId::RightStickX, -30)), None);
        assert!(filter.push(sample(AxisId::RightStickX, 31)).is_some());
    }

    #[test]
    fn test_left_threshold_boundary() {
        let mut filter = AxisFilter::left();
        assert_eq!(filter.push(sample(AxisId::LeftStickX, 42)), None);
        assert_eq!(filter.push(sample(AxisId::LeftStickX, -42)), None);
        assert!(filter.push(sample(AxisId::LeftStickX, 43)).is_some());
        assert!(filter.push(sample(AxisId::LeftStickY, -43)).is_some());
    }

    #[test]
    fn test_axes_tracked_independently() {
        let mut filter = AxisFilter::right();
        assert!(filter.push(sample(AxisId::RightStickX, 100)).is_some());
        // Y has its own last value and still passes the same number.
        assert!(filter.push(sample(AxisId::RightStickY, 100)).is_some());
        // X re-centers without touching Y.
        assert!(filter.push(sample(AxisId::RightStickX, 0)).is_some());
        assert_eq!(filter.push(sample(AxisId::RightStickY, 100)), None);
    }

    #[test]
    fn test_foreign_axis_is_ignored() {
        let mut filter = AxisFilter::right();
        assert_eq!(filter.push(sample(AxisId::LeftStickX, 200)), None);
        assert_eq!(filter.push(sample(AxisId::ButtonA, 1)), None);
        // Ignoring a foreign axis leaves the filter state untouched.
        assert!(filter.push(sample(AxisId::RightStickX, 200)).is_some());
    }

    #[test]
    fn test_sign_change_is_a_new_value() {
        let mut filter = AxisFilter::left();
        assert!(filter.push(sample(AxisId::LeftStickY, 100)).is_some());
        assert_eq!(
            filter.push(sample(AxisId::LeftStickY, -100)),
            Some(sample(AxisId::LeftStickY, -100))
        );
    }
}
