//! Debounce and dead-zone stages between acquisition and the link.
//!
//! Both stages forward into the shared transmit queue with `try_send`:
//! a full transmit queue drops the event, the same non-blocking
//! contract the acquisition side uses.

use controller_core::{AxisFilter, Debouncer, InputEvent};
use defmt::{trace, warn};
use embassy_time::Instant;

use crate::{EventReceiver, EventSender, RawButtonReceiver};

/// Debounce stage: raw button identities in, accepted presses out.
///
/// Owns the per-button debounce table. Rejected retriggers are
/// discarded with no side effect.
#[embassy_executor::task]
pub async fn debounce_task(raw: RawButtonReceiver, events: EventSender) {
    let mut debouncer = Debouncer::new();

    loop {
        let axis = raw.receive().await;
        let now = Instant::now().as_millis();
        if debouncer.accept(axis, now) {
            if events.try_send(InputEvent::press(axis)).is_err() {
                warn!("transmit queue full, dropping press of {}", axis);
            }
        } else {
            trace!("debounce rejected retrigger of {}", axis);
        }
    }
}

/// Dead-zone/change-detection stage for one stick.
///
/// Two instances run concurrently, one per stick, each owning its own
/// last-value state.
#[embassy_executor::task(pool_size = 2)]
pub async fn filter_task(mut filter: AxisFilter, samples: EventReceiver, events: EventSender) {
    loop {
        let sample = samples.receive().await;
        if let Some(event) = filter.push(sample) {
            if events.try_send(event).is_err() {
                warn!("transmit queue full, dropping {} event", event.axis);
            }
        }
    }
}
