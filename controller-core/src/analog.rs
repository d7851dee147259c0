//! ADC sample normalization and the left-stick multiplexer schedule.

use crate::axis::AxisId;

/// Full-scale raw reading of the 12-bit converter.
pub const ADC_MAX: u16 = 4095;

/// Raw reading treated as stick center.
pub const ADC_CENTER: i32 = 2047;

/// Magnitude bound of a normalized axis value.
pub const AXIS_RANGE: i32 = 255;

/// Map a raw 12-bit converter reading to the signed axis range.
///
/// A centered reading maps to 0 and the result is negated to align
/// with the physical stick orientation. Output stays in
/// [-[`AXIS_RANGE`], [`AXIS_RANGE`]].
#[must_use]
pub fn normalize(raw: u16) -> i16 {
    let mapped = (i32::from(raw) - ADC_CENTER) * AXIS_RANGE / ADC_CENTER;
    (-mapped) as i16
}

/// One step of the left-stick multiplexer schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MuxStep {
    /// Axis the next converter reading is attributed to.
    pub axis: AxisId,
    /// Level to drive on the multiplexer select line before reading.
    pub select_high: bool,
}

/// Alternation schedule for the two left-stick axes sharing one
/// converter channel through an external 1-bit multiplexer.
///
/// X is read with the select line low, Y with it high. Each axis is
/// refreshed every other cycle, so at half the rate of a dedicated
/// channel.
pub struct MuxSchedule {
    read_y: bool,
}

impl MuxSchedule {
    /// A fresh schedule; the first step reads X.
    #[must_use]
    pub const fn new() -> Self {
        Self { read_y: false }
    }

    /// Advance to the next step.
    pub fn advance(&mut self) -> MuxStep {
        let step = if self.read_y {
            MuxStep {
                axis: AxisId::LeftStickY,
                select_high: true,
            }
        } else {
            MuxStep {
                axis: AxisId::LeftStickX,
                select_high: false,
            }
        };
        self.read_y = !self.read_y;
        step
    }
}

impl Default for MuxSchedule {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_maps_to_zero() {
        assert_eq!(normalize(2047), 0);
    }

    #[test]
    fn test_extremes_map_to_range_bounds() {
        // Negated to match physical orientation: low raw = positive.
        assert_eq!(normalize(0), 255);
        assert_eq!(normalize(ADC_MAX), -255);
    }

    #[test]
    fn test_output_stays_in_range() {
        for raw in (0..=ADC_MAX).step_by(7) {
            let value = normalize(raw);
            assert!((-255..=255).contains(&value), "raw {raw} -> {value}");
        }
    }

    #[test]
    fn test_mapping_is_monotonic_decreasing() {
        let mut previous = normalize(0);
        for raw in 1..=ADC_MAX {
            let value = normalize(raw);
            assert!(value <= previous, "raw {raw}");
            previous = value;
        }
    }

    #[test]
    fn test_mux_alternates_axes() {
        let mut schedule = MuxSchedule::new();

        let first = schedule.advance();
        assert_eq!(first.axis, AxisId::LeftStickX);
        assert!(!first.select_high);

        let second = schedule.advance();
        assert_eq!(second.axis, AxisId::LeftStickY);
        assert!(second.select_high);

        // Never the same axis twice in a row.
        let mut last = second.axis;
        for _ in 0..10 {
            let step = schedule.advance();
            assert_ne!(step.axis, last);
            last = step.axis;
        }
    }
}
