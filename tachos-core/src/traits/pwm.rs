//! PWM timer channel abstraction

/// Hardware timer channel producing a fixed-frequency PWM waveform
///
/// The waveform free-runs once configured; the application only ever
/// touches the compare register afterwards.
pub trait PwmTimer {
    /// Configure the timer for non-inverted fast PWM at the given frequency
    fn configure(&mut self, frequency_hz: u32);

    /// Counter value at which the period wraps
    ///
    /// Valid after [`configure`](Self::configure) has been called.
    fn period(&self) -> u16;

    /// Set the compare register (output is high while the counter is below it)
    ///
    /// Callers must not exceed [`period`](Self::period).
    fn set_compare(&mut self, value: u16);
}
