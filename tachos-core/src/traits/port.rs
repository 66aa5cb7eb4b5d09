//! Byte-wide output port abstraction

/// Eight digital output lines written as one byte
///
/// Bit 0 maps to the port's first line. Used for the entry display
/// nibbles and the speed indicator code.
pub trait OutputPort {
    /// Drive all eight lines to the given bit pattern
    fn write(&mut self, value: u8);
}
