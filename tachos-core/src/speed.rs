//! Speed tier classification
//!
//! Maps the entered two-digit value onto one of three discrete motor
//! speeds. Each tier carries its PWM duty cycle and the bit pattern
//! shown on the indicator port.

use crate::input::TwoDigitValue;

/// Values below this run the motor at the low tier
pub const MID_THRESHOLD: u8 = 25;
/// Highest value still in the mid tier
pub const MID_CEILING: u8 = 40;

/// Discrete motor speed tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpeedTier {
    /// Motor runs slowly
    Low,
    /// Intermediate speed
    Mid,
    /// Full speed
    High,
}

impl SpeedTier {
    /// Classify an entered value into its tier
    ///
    /// The three tiers partition `0..=99` with no gaps or overlaps.
    pub fn classify(value: TwoDigitValue) -> Self {
        let value = value.get();
        if value < MID_THRESHOLD {
            SpeedTier::Low
        } else if value <= MID_CEILING {
            SpeedTier::Mid
        } else {
            SpeedTier::High
        }
    }

    /// PWM duty cycle percentage for this tier
    pub fn duty_percent(self) -> u8 {
        match self {
            SpeedTier::Low => 20,
            SpeedTier::Mid => 50,
            SpeedTier::High => 100,
        }
    }

    /// Bit pattern driven onto the indicator port for this tier
    pub fn indicator_code(self) -> u8 {
        match self {
            SpeedTier::Low => 0b0000_0010,
            SpeedTier::Mid => 0b0000_0101,
            SpeedTier::High => 0b1001_1001,
        }
    }
}
