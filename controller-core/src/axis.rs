//! Logical input identities and the event record they travel as.

/// Stable identity of one logical input channel.
///
/// The discriminants are part of the wire protocol: the axis byte of
/// every transmitted frame carries one of these values, and a value is
/// never reused for a different meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AxisId {
    ButtonB = 0,
    ButtonY = 1,
    ButtonX = 2,
    ButtonA = 3,
    TriggerRight = 4,
    TriggerLeft = 5,
    RightStickX = 6,
    RightStickY = 7,
    LeftStickX = 8,
    LeftStickY = 9,
    RightStickClick = 10,
    LeftStickClick = 11,
}

impl AxisId {
    /// Number of logical identities.
    pub const COUNT: usize = 12;

    /// The wire representation of this identity.
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Resolve a wire byte back to an identity.
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::ButtonB),
            1 => Some(Self::ButtonY),
            2 => Some(Self::ButtonX),
            3 => Some(Self::ButtonA),
            4 => Some(Self::TriggerRight),
            5 => Some(Self::TriggerLeft),
            6 => Some(Self::RightStickX),
            7 => Some(Self::RightStickY),
            8 => Some(Self::LeftStickX),
            9 => Some(Self::LeftStickY),
            10 => Some(Self::RightStickClick),
            11 => Some(Self::LeftStickClick),
            _ => None,
        }
    }

    /// Whether this identity is a discrete button rather than a
    /// joystick axis.
    #[inline]
    #[must_use]
    pub const fn is_button(self) -> bool {
        !matches!(
            self,
            Self::RightStickX | Self::RightStickY | Self::LeftStickX | Self::LeftStickY
        )
    }
}

/// One event flowing through the pipeline.
///
/// Buttons carry value 1 (press); joystick axes carry a normalized
/// value in [-255, 255], with 0 meaning "re-centered".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputEvent {
    pub axis: AxisId,
    pub value: i16,
}

impl InputEvent {
    #[inline]
    #[must_use]
    pub const fn new(axis: AxisId, value: i16) -> Self {
        Self { axis, value }
    }

    /// A button press event for `axis`.
    #[inline]
    #[must_use]
    pub const fn press(axis: AxisId) -> Self {
        Self { axis, value: 1 }
    }
}
