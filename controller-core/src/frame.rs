//! Fixed 4-byte wire framing of input events.
//!
//! Frame layout:
//!
//! ```text
//! [axis:u8][value_hi:u8][value_lo:u8][0xFF]
//! ```
//!
//! The value travels as a 16-bit big-endian two's-complement quantity
//! and `0xFF` closes every frame. The link is fire-and-forget: no
//! checksum, acknowledgment, or retransmission.

use crate::axis::{AxisId, InputEvent};

/// Length of one encoded frame.
pub const FRAME_LEN: usize = 4;

/// Sentinel byte closing every frame.
pub const FRAME_END: u8 = 0xFF;

/// Decoding failure for one received frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Axis byte does not name a known identity.
    UnknownAxis,
    /// Final byte is not the frame sentinel.
    MissingSentinel,
}

/// Encode one event as a wire frame.
#[must_use]
pub fn encode(event: InputEvent) -> [u8; FRAME_LEN] {
    let value = event.value as u16;
    [
        event.axis.as_u8(),
        (value >> 8) as u8,
        (value & 0xFF) as u8,
        FRAME_END,
    ]
}

/// Decode one wire frame back into an event.
pub fn decode(raw: &[u8; FRAME_LEN]) -> Result<InputEvent, FrameError> {
    if raw[3] != FRAME_END {
        return Err(FrameError::MissingSentinel);
    }
    let axis = AxisId::from_u8(raw[0]).ok_or(FrameError::UnknownAxis)?;
    let value = i16::from_be_bytes([raw[1], raw[2]]);
    Ok(InputEvent::new(axis, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_axis_value_frame() {
        // -200 as 16-bit two's complement is 0xFF38.
        let event = InputEvent::new(AxisId::RightStickX, -200);
        assert_eq!(encode(event), [0x06, 0xFF, 0x38, 0xFF]);
        assert_eq!(decode(&[0x06, 0xFF, 0x38, 0xFF]), Ok(event));
    }

    #[test]
    fn test_button_press_frame() {
        let event = InputEvent::press(AxisId::ButtonB);
        assert_eq!(encode(event), [0x00, 0x00, 0x01, 0xFF]);
    }

    #[test]
    fn test_round_trip_extremes() {
        for value in [-255, -1, 0, 1, 255] {
            let event = InputEvent::new(AxisId::LeftStickY, value);
            assert_eq!(decode(&encode(event)), Ok(event));
        }
    }

    #[test]
    fn test_decode_rejects_bad_sentinel() {
        assert_eq!(
            decode(&[0x06, 0xFF, 0x38, 0x00]),
            Err(FrameError::MissingSentinel)
        );
    }

    #[test]
    fn test_decode_rejects_unknown_axis() {
        assert_eq!(
            decode(&[0x0C, 0x00, 0x01, 0xFF]),
            Err(FrameError::UnknownAxis)
        );
    }
}
