//! Top-level control loop
//!
//! Orchestrates the whole machine: keypad digits are assembled into a
//! two-digit value, classified into a speed tier, and driven out as a
//! PWM duty cycle plus indicator code. The stop button is polled
//! throughout digit entry and resets every output when pressed.

use crate::input::{DigitSlot, TwoDigitValue, DIGIT_DEBOUNCE_MS};
use crate::keypad::Keypad;
use crate::pwm::PwmGenerator;
use crate::speed::SpeedTier;
use crate::traits::{DelayMs, InputPin, OutputPin, OutputPort, PwmTimer};

/// Hold-off after the stop button is seen, in ms, absorbing the button
/// release before scanning resumes
pub const STOP_DEBOUNCE_MS: u32 = 1000;

/// The controller owns every hardware collaborator
///
/// - `C`/`R`: keypad column-drive and row-sense lines
/// - `B`: stop button input, active-low
/// - `P`/`I`: display and indicator output ports
/// - `T`: PWM timer channel
/// - `D`: blocking delay source
pub struct Controller<C, R, B, P, I, T, D> {
    keypad: Keypad<C, R>,
    stop_button: B,
    display: P,
    indicator: I,
    pwm: PwmGenerator<T>,
    delay: D,
    /// Shadow of the display port, so nibble merges see the last write
    display_latch: u8,
}

impl<C, R, B, P, I, T, D> Controller<C, R, B, P, I, T, D>
where
    C: OutputPin,
    R: InputPin,
    B: InputPin,
    P: OutputPort,
    I: OutputPort,
    T: PwmTimer,
    D: DelayMs,
{
    /// Create a new controller from its hardware collaborators
    ///
    /// No hardware is touched until [`init`](Self::init).
    pub fn new(
        keypad: Keypad<C, R>,
        stop_button: B,
        display: P,
        indicator: I,
        pwm: PwmGenerator<T>,
        delay: D,
    ) -> Self {
        Self {
            keypad,
            stop_button,
            display,
            indicator,
            pwm,
            delay,
            display_latch: 0,
        }
    }

    /// One-time boot initialization: configure the PWM carrier and zero
    /// the duty cycle and both output ports
    pub fn init(&mut self) {
        self.pwm.init();
        self.pwm.set_duty_cycle(0);
        self.display_latch = 0;
        self.display.write(0);
        self.indicator.write(0);
    }

    /// Run the control loop forever
    pub fn run(&mut self) -> ! {
        self.init();
        loop {
            self.run_cycle();
        }
    }

    /// One pass of the main loop: collect both digits and apply the
    /// resulting speed tier
    ///
    /// Returns early, with all outputs already zeroed, if the stop
    /// button cancels entry at any point.
    pub fn run_cycle(&mut self) {
        let Some(tens) = self.collect_digit(DigitSlot::Tens) else {
            return;
        };
        let Some(ones) = self.collect_digit(DigitSlot::Ones) else {
            return;
        };

        let value = TwoDigitValue::from_digits(tens, ones);
        let tier = SpeedTier::classify(value);
        #[cfg(feature = "defmt")]
        defmt::info!("entered {}, applying {:?}", value.get(), tier);
        self.apply(tier);
    }

    /// Poll until a digit key is accepted or the stop button cancels
    ///
    /// Awaiting phase: each iteration first samples the stop button
    /// (pressed means clean up and bail out with `None`), then scans the
    /// keypad; non-digit keys and empty sweeps keep waiting. Debounce
    /// phase: once a digit is accepted it is mirrored on the display
    /// port, then the collector holds off long enough for the key to be
    /// released before returning.
    fn collect_digit(&mut self, slot: DigitSlot) -> Option<u8> {
        loop {
            if self.stop_button.is_low() {
                self.clean_up();
                return None;
            }

            let Some(key) = self.keypad.scan(&mut self.delay) else {
                continue;
            };
            if let Some(digit) = key.to_digit(10) {
                let digit = digit as u8;
                #[cfg(feature = "defmt")]
                defmt::debug!("digit accepted: {}", digit);

                self.display_latch = slot.merge(self.display_latch, digit);
                self.display.write(self.display_latch);
                self.delay.delay_ms(DIGIT_DEBOUNCE_MS);
                return Some(digit);
            }
        }
    }

    /// Drive the indicator code and PWM duty cycle for a tier
    fn apply(&mut self, tier: SpeedTier) {
        self.indicator.write(tier.indicator_code());
        self.pwm.set_duty_cycle(tier.duty_percent());
    }

    /// Stop-button reset: zero every output and discard in-flight entry
    ///
    /// Waits out the button release first, then clears the display port,
    /// duty cycle, and indicator port in that order. Safe to trigger
    /// repeatedly while the button is held.
    fn clean_up(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::info!("stop pressed, resetting outputs");

        self.delay.delay_ms(STOP_DEBOUNCE_MS);
        self.display_latch = 0;
        self.display.write(0);
        self.pwm.set_duty_cycle(0);
        self.indicator.write(0);
    }
}
