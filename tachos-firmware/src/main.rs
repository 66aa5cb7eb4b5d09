//! Tachos - Keypad-Dialed Motor Speed Controller Firmware
//!
//! Firmware binary for RP2040-based controller boards. Wires the
//! board-agnostic control loop from `tachos-core` to the keypad,
//! stop button, display/indicator ports, and motor PWM output.
//!
//! Named after the Greek "tachos" meaning "speed" - the whole machine
//! exists to turn two keypresses into a motor speed.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::pwm::Pwm;
use {defmt_rtt as _, panic_probe as _};

use tachos_core::controller::Controller;
use tachos_core::keypad::Keypad;
use tachos_core::pwm::PwmGenerator;

use crate::board::{BlockingDelay, GpioPort, SlicePwm};

mod board;

/// Main entry point
///
/// The whole machine is one blocking polling loop; nothing else is
/// spawned and the executor never regains control.
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Tachos firmware starting...");

    let p = embassy_rp::init(Default::default());

    // Keypad: columns driven low one at a time, rows sensed through
    // pull-ups (active-low)
    let columns = [
        Output::new(p.PIN_0, Level::High),
        Output::new(p.PIN_1, Level::High),
        Output::new(p.PIN_2, Level::High),
        Output::new(p.PIN_3, Level::High),
    ];
    let rows = [
        Input::new(p.PIN_4, Pull::Up),
        Input::new(p.PIN_5, Pull::Up),
        Input::new(p.PIN_6, Pull::Up),
        Input::new(p.PIN_7, Pull::Up),
    ];
    let keypad = Keypad::new(columns, rows);

    // Stop button, active-low
    let stop_button = Input::new(p.PIN_8, Pull::Up);

    // Entry display port: first digit on the low nibble, second on the high
    let display = GpioPort::new([
        Output::new(p.PIN_9, Level::Low),
        Output::new(p.PIN_10, Level::Low),
        Output::new(p.PIN_11, Level::Low),
        Output::new(p.PIN_12, Level::Low),
        Output::new(p.PIN_13, Level::Low),
        Output::new(p.PIN_14, Level::Low),
        Output::new(p.PIN_15, Level::Low),
        Output::new(p.PIN_16, Level::Low),
    ]);

    // Speed indicator port
    let indicator = GpioPort::new([
        Output::new(p.PIN_17, Level::Low),
        Output::new(p.PIN_18, Level::Low),
        Output::new(p.PIN_19, Level::Low),
        Output::new(p.PIN_20, Level::Low),
        Output::new(p.PIN_21, Level::Low),
        Output::new(p.PIN_22, Level::Low),
        Output::new(p.PIN_26, Level::Low),
        Output::new(p.PIN_27, Level::Low),
    ]);

    // Motor PWM output on GPIO28 (slice 6, channel A)
    let pwm = SlicePwm::new(Pwm::new_output_a(
        p.PWM_SLICE6,
        p.PIN_28,
        Default::default(),
    ));

    info!("Peripherals initialized");

    let mut controller = Controller::new(
        keypad,
        stop_button,
        display,
        indicator,
        PwmGenerator::new(pwm),
        BlockingDelay,
    );

    info!("Control loop running");
    controller.run()
}
