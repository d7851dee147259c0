//! Falling-edge button capture.
//!
//! One pooled task per wired button pin. Each task parks on the GPIO
//! edge interrupt, resolves the pin to its logical identity through
//! the static mapping table, and pushes the identity into the
//! raw-button queue. The push never waits: an interrupt wakeup must
//! not block on a full queue, so bursts beyond the queue depth are
//! dropped. Debounce is the downstream pipeline stage's job, keeping
//! this stage minimal.

use controller_core::button_for_pin;
use defmt::{error, warn};
use embassy_rp::gpio::Input;

use crate::RawButtonSender;

/// Edge-wait loop for one button pin.
///
/// `gpio` is the bank-0 pin number of `pin`, used only to resolve the
/// logical identity. A pin missing from the mapping table is a wiring
/// bug; the task logs it and parks.
#[embassy_executor::task(pool_size = 8)]
pub async fn button_task(mut pin: Input<'static>, gpio: u8, raw: RawButtonSender) {
    let Some(axis) = button_for_pin(gpio) else {
        error!("no button mapped to GPIO {}", gpio);
        return;
    };

    loop {
        pin.wait_for_falling_edge().await;
        if raw.try_send(axis).is_err() {
            warn!("raw button queue full, dropping press of {}", axis);
        }
    }
}
