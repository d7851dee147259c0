//! Bluetooth gamepad link firmware for the Raspberry Pi Pico.
//!
//! The firmware bridges the controller's physical inputs (eight
//! buttons, two analog sticks) to an HC-06 Bluetooth serial module as
//! a stream of fixed 4-byte frames.
//!
//! # Hardware Configuration
//!
//! | Function            | GPIO  | Description                   |
//! |---------------------|-------|-------------------------------|
//! | Buttons B/Y/X/A     | 10-13 | Active-low, internal pull-up  |
//! | Right/left trigger  | 14/15 | Active-low, internal pull-up  |
//! | Right stick click   | 21    | Active-low, internal pull-up  |
//! | Left stick click    | 20    | Active-low, internal pull-up  |
//! | Right stick X / Y   | 26/27 | ADC channels 0 and 1          |
//! | Left stick (muxed)  | 28    | ADC channel 2, shared via mux |
//! | Mux select          | 16    | Low = left X, high = left Y   |
//! | HC-06 UART1 TX / RX | 8/9   | 9600 baud, 8N1                |
//! | LED                 | 25    | On-board LED (frame activity) |
//!
//! # Architecture
//!
//! Data flows one way through four bounded queues:
//!
//! ```text
//! button edges -> raw buttons -> debounce ----\
//! right X/Y samplers -> right raw -> filter ---> transmit -> HC-06
//! left mux sampler   -> left raw  -> filter --/
//! ```
//!
//! Every producer pushes with `try_send` and drops the element when
//! the queue is full; consumers suspend on `receive().await`. Tasks
//! run on two executors: an interrupt executor for the time-sensitive
//! stages (edge capture, debounce, filtering) and the thread executor
//! for the periodic samplers and the serial link.
//!
//! All pipeline policy (identities, debounce, dead zones, framing)
//! lives in [`controller_core`] and is re-exported here.
//!
//! # Features
//!
//! - **`dev-panic`** (default): Use `panic-probe` for development
//!   (prints panic info via RTT)
//! - **`prod-panic`**: Use `panic-reset` for production (silent reset)

#![no_std]

use embassy_rp::adc::{Adc, Async};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use embassy_sync::mutex::Mutex;

// Re-export core types for convenience
pub use controller_core::{
    button_for_pin, normalize, AxisFilter, AxisId, Debouncer, FrameError, InputEvent, MuxSchedule,
    MuxStep, BUTTON_PINS, DEBOUNCE_WINDOW_MS, FRAME_END, FRAME_LEN, LEFT_DEAD_ZONE,
    RIGHT_DEAD_ZONE,
};

pub mod input;
pub mod output;
pub mod pipeline;

pub use input::{button_task, left_stick_task, right_stick_task};
pub use output::{link_task, Hc06Link};
pub use pipeline::{debounce_task, filter_task};

/// Capacity of every pipeline queue. Fixed at construction; producers
/// drop on full.
pub const QUEUE_DEPTH: usize = 32;

/// Queue of raw button identities, edge capture to debouncer.
pub type RawButtonChannel = Channel<CriticalSectionRawMutex, AxisId, QUEUE_DEPTH>;
pub type RawButtonSender = Sender<'static, CriticalSectionRawMutex, AxisId, QUEUE_DEPTH>;
pub type RawButtonReceiver = Receiver<'static, CriticalSectionRawMutex, AxisId, QUEUE_DEPTH>;

/// Queue of [`InputEvent`]s, used for raw samples and the transmit
/// stage alike.
pub type EventChannel = Channel<CriticalSectionRawMutex, InputEvent, QUEUE_DEPTH>;
pub type EventSender = Sender<'static, CriticalSectionRawMutex, InputEvent, QUEUE_DEPTH>;
pub type EventReceiver = Receiver<'static, CriticalSectionRawMutex, InputEvent, QUEUE_DEPTH>;

/// The RP2040's single ADC, serialized behind a mutex so no sampler
/// can switch channels in the middle of another sampler's read.
pub type SharedAdc = Mutex<CriticalSectionRawMutex, Adc<'static, Async>>;
