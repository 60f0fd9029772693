//! Serial line framing configuration
//!
//! The GPS receiver is read by a software UART, so only the parameters a
//! bit-sampling receiver needs are modelled: 8 data bits, no parity and
//! one stop bit are fixed.

/// Order in which data bits appear on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    /// Standard asynchronous serial: bit 0 follows the start bit
    #[default]
    LsbFirst,
    /// Bit 7 follows the start bit
    MsbFirst,
}

/// UART configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Data bit order
    pub bit_order: BitOrder,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self {
            baudrate: 9600, // NMEA-0183 default
            bit_order: BitOrder::LsbFirst,
        }
    }
}

impl UartConfig {
    /// Duration of one bit in nanoseconds
    pub fn bit_period_ns(&self) -> u32 {
        1_000_000_000 / self.baudrate.max(1)
    }

    /// Duration of half a bit in nanoseconds (start edge to bit centre)
    pub fn half_bit_ns(&self) -> u32 {
        self.bit_period_ns() / 2
    }
}
