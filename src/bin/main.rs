//! Firmware entry point: peripheral bring-up, queue construction, and
//! task spawning across the two priority tiers.

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::{info, unwrap};
use defmt_rtt as _;
use embassy_executor::{Executor, InterruptExecutor};
use embassy_rp::adc::{
    Adc, Channel as AdcChannel, Config as AdcConfig, InterruptHandler as AdcInterruptHandler,
};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_rp::peripherals::UART1;
use embassy_rp::uart::{Config as UartConfig, Uart};
use embassy_sync::channel::Channel;
use embassy_sync::mutex::Mutex;
use static_cell::StaticCell;

use pico_gamepad_link::input::{button_task, left_stick_task, right_stick_task};
use pico_gamepad_link::output::{link_task, Hc06Link, BAUD_RATE};
use pico_gamepad_link::pipeline::{debounce_task, filter_task};
use pico_gamepad_link::{AxisFilter, AxisId, EventChannel, RawButtonChannel, SharedAdc};

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

bind_interrupts!(struct Irqs {
    UART1_IRQ => embassy_rp::uart::InterruptHandler<UART1>;
    ADC_IRQ_FIFO => AdcInterruptHandler;
});

/// Bluetooth identity presented to the paired host.
const DEVICE_NAME: &str = "bruno-stanz";
/// Pairing PIN.
const DEVICE_PIN: &str = "1234";

// Bounded queues of the pipeline. Construction is const, so every
// handle below is valid before any task starts.
static RAW_BUTTONS: RawButtonChannel = Channel::new();
static RIGHT_RAW: EventChannel = Channel::new();
static LEFT_RAW: EventChannel = Channel::new();
static TRANSMIT: EventChannel = Channel::new();

static ADC: StaticCell<SharedAdc> = StaticCell::new();

static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();
static EXECUTOR_MID: StaticCell<Executor> = StaticCell::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_HIGH.on_interrupt()
}

#[entry]
fn main() -> ! {
    info!("gamepad link starting");

    let p = embassy_rp::init(Default::default());

    // Single physical converter, shared by all sampler tasks.
    let adc = ADC.init(Mutex::new(Adc::new(p.ADC, Irqs, AdcConfig::default())));
    let right_x = AdcChannel::new_pin(p.PIN_26, Pull::None);
    let right_y = AdcChannel::new_pin(p.PIN_27, Pull::None);
    let left_xy = AdcChannel::new_pin(p.PIN_28, Pull::None);
    let mux_select = Output::new(p.PIN_16, Level::Low);

    let mut uart_config = UartConfig::default();
    uart_config.baudrate = BAUD_RATE;
    let uart = Uart::new(
        p.UART1,
        p.PIN_8, // TX
        p.PIN_9, // RX
        Irqs,
        p.DMA_CH0,
        p.DMA_CH1,
        uart_config,
    );
    // AT responses are never read; the link is write-only.
    let (tx, _rx) = uart.split();
    let link = Hc06Link::new(tx);

    let led = Output::new(p.PIN_25, Level::Low);

    // Time-sensitive tier: edge capture, debounce and filtering run on
    // the interrupt executor and preempt the samplers and the link.
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let high = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);

    let raw = RAW_BUTTONS.sender();
    unwrap!(high.spawn(button_task(Input::new(p.PIN_10, Pull::Up), 10, raw)));
    unwrap!(high.spawn(button_task(Input::new(p.PIN_11, Pull::Up), 11, raw)));
    unwrap!(high.spawn(button_task(Input::new(p.PIN_12, Pull::Up), 12, raw)));
    unwrap!(high.spawn(button_task(Input::new(p.PIN_13, Pull::Up), 13, raw)));
    unwrap!(high.spawn(button_task(Input::new(p.PIN_14, Pull::Up), 14, raw)));
    unwrap!(high.spawn(button_task(Input::new(p.PIN_15, Pull::Up), 15, raw)));
    unwrap!(high.spawn(button_task(Input::new(p.PIN_21, Pull::Up), 21, raw)));
    unwrap!(high.spawn(button_task(Input::new(p.PIN_20, Pull::Up), 20, raw)));

    unwrap!(high.spawn(debounce_task(RAW_BUTTONS.receiver(), TRANSMIT.sender())));
    unwrap!(high.spawn(filter_task(
        AxisFilter::right(),
        RIGHT_RAW.receiver(),
        TRANSMIT.sender(),
    )));
    unwrap!(high.spawn(filter_task(
        AxisFilter::left(),
        LEFT_RAW.receiver(),
        TRANSMIT.sender(),
    )));

    info!("pipeline tasks spawned, starting samplers and link");

    // Middle tier: periodic sampling and the serial link.
    let executor = EXECUTOR_MID.init(Executor::new());
    executor.run(|mid| {
        unwrap!(mid.spawn(right_stick_task(
            adc,
            right_x,
            AxisId::RightStickX,
            RIGHT_RAW.sender(),
        )));
        unwrap!(mid.spawn(right_stick_task(
            adc,
            right_y,
            AxisId::RightStickY,
            RIGHT_RAW.sender(),
        )));
        unwrap!(mid.spawn(left_stick_task(
            adc,
            left_xy,
            mux_select,
            LEFT_RAW.sender(),
        )));
        unwrap!(mid.spawn(link_task(
            link,
            DEVICE_NAME,
            DEVICE_PIN,
            TRANSMIT.receiver(),
            led,
        )));
    })
}
