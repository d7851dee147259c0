//! HC-06 Bluetooth serial link: module configuration and frame output.
//!
//! The HC-06 presents a transparent UART once paired. Configuration
//! uses its AT command set: commands are plain text with no
//! terminator, and the module wants roughly a second of quiet around
//! each one. Responses are not read; a module that ignores the
//! commands keeps its previous name and PIN and still passes data
//! through.

use controller_core::{frame, InputEvent};
use core::fmt::Write as _;
use defmt::{info, warn};
use embassy_rp::gpio::Output;
use embassy_rp::uart::{Async, UartTx};
use embassy_time::Timer;
use heapless::String;

use crate::EventReceiver;

/// UART baud rate of an unconfigured HC-06.
pub const BAUD_RATE: u32 = 9600;

/// Quiet period after each AT command, in milliseconds.
const AT_GAP_MS: u64 = 1100;

/// Write side of the Bluetooth serial channel.
///
/// The link task is the sole owner, so no write-side locking exists
/// anywhere in the firmware.
pub struct Hc06Link<'d> {
    tx: UartTx<'d, Async>,
}

impl<'d> Hc06Link<'d> {
    #[must_use]
    pub fn new(tx: UartTx<'d, Async>) -> Self {
        Self { tx }
    }

    /// Configure the module's advertised name and pairing PIN.
    pub async fn configure(&mut self, name: &str, pin: &str) {
        self.command("AT").await;

        let mut cmd: String<40> = String::new();
        let _ = write!(cmd, "AT+NAME{name}");
        self.command(&cmd).await;

        cmd.clear();
        let _ = write!(cmd, "AT+PIN{pin}");
        self.command(&cmd).await;

        info!("HC-06 configured as {}", name);
    }

    async fn command(&mut self, cmd: &str) {
        if self.tx.write(cmd.as_bytes()).await.is_err() {
            warn!("HC-06 command write failed");
        }
        Timer::after_millis(AT_GAP_MS).await;
    }

    /// Write one event to the link as a 4-byte frame.
    ///
    /// Fire and forget: the link carries no acknowledgment and a
    /// failed write is not retried.
    pub async fn send(&mut self, event: InputEvent) {
        if self.tx.write(&frame::encode(event)).await.is_err() {
            warn!("frame write failed for {}", event.axis);
        }
    }
}

/// Link stage: configures the module, then drains the transmit queue
/// onto the serial channel. The LED toggles once per transmitted
/// frame.
#[embassy_executor::task]
pub async fn link_task(
    mut link: Hc06Link<'static>,
    name: &'static str,
    pin: &'static str,
    events: EventReceiver,
    mut led: Output<'static>,
) {
    link.configure(name, pin).await;
    info!("link ready, forwarding input events");

    loop {
        let event = events.receive().await;
        link.send(event).await;
        led.toggle();
    }
}
