//! Static GPIO-to-identity mapping for the button inputs.
//!
//! GPIO numbers refer to bank 0 of the reference board (Raspberry Pi
//! Pico). All buttons are wired active-low with internal pull-ups.

use crate::axis::AxisId;

/// Every wired button pin and the identity it resolves to.
///
/// | GPIO | Identity          |
/// |------|-------------------|
/// | 10   | B                 |
/// | 11   | Y                 |
/// | 12   | X                 |
/// | 13   | A                 |
/// | 14   | Right trigger     |
/// | 15   | Left trigger      |
/// | 21   | Right stick click |
/// | 20   | Left stick click  |
pub const BUTTON_PINS: [(u8, AxisId); 8] = [
    (10, AxisId::ButtonB),
    (11, AxisId::ButtonY),
    (12, AxisId::ButtonX),
    (13, AxisId::ButtonA),
    (14, AxisId::TriggerRight),
    (15, AxisId::TriggerLeft),
    (21, AxisId::RightStickClick),
    (20, AxisId::LeftStickClick),
];

/// Resolve a bank-0 GPIO number to its button identity.
///
/// Returns `None` for pins that carry no button.
#[must_use]
pub const fn button_for_pin(gpio: u8) -> Option<AxisId> {
    match gpio {
        10 => Some(AxisId::ButtonB),
        11 => Some(AxisId::ButtonY),
        12 => Some(AxisId::ButtonX),
        13 => Some(AxisId::ButtonA),
        14 => Some(AxisId::TriggerRight),
        15 => Some(AxisId::TriggerLeft),
        21 => Some(AxisId::RightStickClick),
        20 => Some(AxisId::LeftStickClick),
        _ => None,
    }
}
