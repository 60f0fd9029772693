//! Board configuration
//!
//! Pin map and tuning for the reference board: a Pico with the GPS
//! module on GPIO1/2, a MAX7219 six-digit module on GPIO10/11/13 and the
//! photo divider plus adjust button on GPIO26.

use meridian_core::config::ClockConfig;
use meridian_hal::UartConfig;

/// Digits on the display module
pub const DIGITS: usize = 6;

/// GPS TX -> our RX (must match the pin passed to the soft UART)
pub const GPS_RX_GPIO: u8 = 1;

/// GPS 1PPS output (must match the pin passed to the edge flags)
pub const TIMEPULSE_GPIO: u8 = 2;

/// Bit-bang SPI clock half period; the MAX7219 accepts 10 MHz
pub const SPI_HALF_PERIOD_NS: u32 = 100;

/// GPS serial framing
pub fn uart_config() -> UartConfig {
    UartConfig::default()
}

/// Clock behaviour
pub fn clock_config() -> ClockConfig {
    ClockConfig::default()
}
