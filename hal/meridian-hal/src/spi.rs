//! SPI bus abstractions
//!
//! The display only ever receives data, so the bus is write-only and
//! always runs in mode 0 (clock idles low, data captured on the rising edge).

/// SPI bus master
///
/// Chip select is not part of the bus; device drivers own their CS pin
/// and frame transfers themselves.
pub trait SpiBus {
    /// Error type for SPI operations
    type Error;

    /// Write data, most-significant bit of each byte first
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}
