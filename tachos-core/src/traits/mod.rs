//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod delay;
pub mod gpio;
pub mod port;
pub mod pwm;

pub use delay::DelayMs;
pub use gpio::{InputPin, OutputPin};
pub use port::OutputPort;
pub use pwm::PwmTimer;
