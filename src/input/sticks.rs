//! Periodic joystick sampling.
//!
//! The right stick owns one converter channel per axis. The left stick
//! time-shares a single channel through an external 1-bit multiplexer,
//! so each of its axes refreshes at half the right stick's rate.
//!
//! Samplers forward every normalized reading; dead-zone filtering is
//! the downstream filter stage's job. All samplers go through the
//! shared ADC mutex: the RP2040 has one converter, and a read must not
//! be preempted between channel select and sample.

use controller_core::{normalize, AxisId, InputEvent, MuxSchedule};
use defmt::warn;
use embassy_rp::adc::Channel as AdcChannel;
use embassy_rp::gpio::{Level, Output};
use embassy_time::{Duration, Ticker};

use crate::{EventSender, SharedAdc};

/// Period between raw samples of one converter channel, in
/// milliseconds.
pub const SAMPLE_PERIOD_MS: u64 = 100;

/// Dedicated-channel sampler for one right-stick axis.
#[embassy_executor::task(pool_size = 2)]
pub async fn right_stick_task(
    adc: &'static SharedAdc,
    mut channel: AdcChannel<'static>,
    axis: AxisId,
    samples: EventSender,
) {
    let mut ticker = Ticker::every(Duration::from_millis(SAMPLE_PERIOD_MS));

    loop {
        let reading = adc.lock().await.read(&mut channel).await;
        match reading {
            Ok(raw) => {
                if samples.try_send(InputEvent::new(axis, normalize(raw))).is_err() {
                    warn!("right stick queue full, dropping {} sample", axis);
                }
            }
            Err(e) => warn!("ADC read failed on {}: {}", axis, e),
        }
        ticker.next().await;
    }
}

/// Multiplexed sampler for both left-stick axes.
///
/// Each cycle advances the alternation schedule, drives the mux select
/// line, and attributes the reading to the scheduled axis.
#[embassy_executor::task]
pub async fn left_stick_task(
    adc: &'static SharedAdc,
    mut channel: AdcChannel<'static>,
    mut select: Output<'static>,
    samples: EventSender,
) {
    let mut schedule = MuxSchedule::new();
    let mut ticker = Ticker::every(Duration::from_millis(SAMPLE_PERIOD_MS));

    loop {
        let step = schedule.advance();
        select.set_level(if step.select_high {
            Level::High
        } else {
            Level::Low
        });

        let reading = adc.lock().await.read(&mut channel).await;
        match reading {
            Ok(raw) => {
                let event = InputEvent::new(step.axis, normalize(raw));
                if samples.try_send(event).is_err() {
                    warn!("left stick queue full, dropping {} sample", step.axis);
                }
            }
            Err(e) => warn!("ADC read failed on {}: {}", step.axis, e),
        }
        ticker.next().await;
    }
}
