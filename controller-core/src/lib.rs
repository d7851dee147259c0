//! Platform-agnostic input pipeline policy for the Pico gamepad link.
//!
//! This crate holds every policy decision of the controller's
//! input-to-wire pipeline without any hardware dependencies, so it can
//! be used both in the embedded `no_std` firmware and on host for
//! testing.
//!
//! # Overview
//!
//! The crate is organized into several modules:
//!
//! - [`axis`]: Logical input identities and the event record
//!   ([`AxisId`], [`InputEvent`])
//! - [`pins`]: Static GPIO-to-identity mapping ([`button_for_pin`])
//! - [`debounce`]: Retrigger suppression for buttons ([`Debouncer`])
//! - [`analog`]: ADC normalization and the left-stick multiplexer
//!   schedule ([`normalize`], [`MuxSchedule`])
//! - [`filter`]: Dead-zone and change-detection policy ([`AxisFilter`])
//! - [`frame`]: The 4-byte wire codec ([`frame::encode`],
//!   [`frame::decode`])
//!
//! # Wire Protocol
//!
//! Every transmitted event is one fixed-size frame:
//!
//! ```text
//! [axis:u8][value_hi:u8][value_lo:u8][0xFF]
//! ```
//!
//! with the value as a 16-bit big-endian two's-complement quantity and
//! `0xFF` closing the frame. There is no acknowledgment, checksum, or
//! retransmission on the link.
//!
//! # Example
//!
//! ```rust
//! use controller_core::{frame, AxisFilter, AxisId, InputEvent};
//!
//! let mut filter = AxisFilter::right();
//!
//! // A deflected stick produces an event; holding it there does not.
//! let sample = InputEvent::new(AxisId::RightStickX, -200);
//! let event = filter.push(sample).unwrap();
//! assert_eq!(frame::encode(event), [0x06, 0xFF, 0x38, 0xFF]);
//! assert_eq!(filter.push(sample), None);
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host use)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod analog;
pub mod axis;
pub mod debounce;
pub mod filter;
pub mod frame;
pub mod pins;

// Re-export main types at crate root
pub use analog::{normalize, MuxSchedule, MuxStep, ADC_CENTER, ADC_MAX, AXIS_RANGE};
pub use axis::{AxisId, InputEvent};
pub use debounce::{Debouncer, DEBOUNCE_WINDOW_MS};
pub use filter::{AxisFilter, LEFT_DEAD_ZONE, RIGHT_DEAD_ZONE};
pub use frame::{FrameError, FRAME_END, FRAME_LEN};
pub use pins::{button_for_pin, BUTTON_PINS};
