//! Blocking delay abstraction
//!
//! All settle and debounce waits go through this seam, so host tests can
//! substitute a zero-duration simulated clock.

/// Blocking millisecond delay
pub trait DelayMs {
    /// Busy-wait for the given number of milliseconds
    fn delay_ms(&mut self, ms: u32);
}
