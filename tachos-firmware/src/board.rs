//! RP2040 bindings for the core hardware traits
//!
//! Maps the board-agnostic traits from `tachos-core` onto embassy-rp
//! peripherals: single GPIO lines, an eight-line output port, a PWM
//! slice, and a busy-wait delay.

use embassy_rp::gpio::{Input, Output};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_time::Duration;

use tachos_core::traits::{DelayMs, InputPin, OutputPin, OutputPort, PwmTimer};

impl OutputPin for Output<'static> {
    fn set_high(&mut self) {
        Output::set_high(self);
    }

    fn set_low(&mut self) {
        Output::set_low(self);
    }
}

impl InputPin for Input<'static> {
    fn is_high(&self) -> bool {
        Input::is_high(self)
    }
}

/// Byte-wide output port built from eight GPIO lines, bit 0 first
pub struct GpioPort {
    pins: [Output<'static>; 8],
}

impl GpioPort {
    /// Bundle eight output lines into one port
    pub fn new(pins: [Output<'static>; 8]) -> Self {
        Self { pins }
    }
}

impl OutputPort for GpioPort {
    fn write(&mut self, value: u8) {
        for (bit, pin) in self.pins.iter_mut().enumerate() {
            if value & (1 << bit) != 0 {
                pin.set_high();
            } else {
                pin.set_low();
            }
        }
    }
}

/// PWM counter tick rate after the clock divider
const PWM_TICK_HZ: u32 = 1_000_000;

/// Hardware PWM on an RP2040 slice, channel A output
///
/// The slice counter is divided down to a 1 MHz tick, so the top value
/// for a given carrier frequency is `1 MHz / f - 1`.
pub struct SlicePwm {
    pwm: Pwm<'static>,
    config: PwmConfig,
}

impl SlicePwm {
    /// Wrap a PWM slice configured for channel A output
    pub fn new(pwm: Pwm<'static>) -> Self {
        Self {
            pwm,
            config: PwmConfig::default(),
        }
    }
}

impl PwmTimer for SlicePwm {
    fn configure(&mut self, frequency_hz: u32) {
        // divider = clk_sys / 1 MHz (125 on a stock 125 MHz clock)
        let divider = (embassy_rp::clocks::clk_sys_freq() / PWM_TICK_HZ).clamp(1, 255) as u8;
        self.config.divider = divider.into();
        self.config.top = (PWM_TICK_HZ / frequency_hz - 1) as u16;
        self.config.compare_a = 0;
        self.pwm.set_config(&self.config);
    }

    fn period(&self) -> u16 {
        self.config.top
    }

    fn set_compare(&mut self, value: u16) {
        self.config.compare_a = value;
        self.pwm.set_config(&self.config);
    }
}

/// Busy-wait delay backed by the embassy time driver
///
/// Blocks the executor; the control loop is the only task, so there is
/// nothing to yield to.
pub struct BlockingDelay;

impl DelayMs for BlockingDelay {
    fn delay_ms(&mut self, ms: u32) {
        embassy_time::block_for(Duration::from_millis(ms as u64));
    }
}
