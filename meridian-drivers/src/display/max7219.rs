//! MAX7219 eight-digit LED display driver
//!
//! Digits run in Code-B decode mode, so digit registers take the symbol
//! codes produced by the core compositor directly.

use meridian_core::display::Symbol;
use meridian_core::traits::{DisplayDriver, DisplayError, FIRST_DIGIT_REGISTER};
use meridian_hal::{OutputPin, SpiBus};

/// Register addresses
pub mod register {
    pub const DECODE_MODE: u8 = 0x09;
    pub const INTENSITY: u8 = 0x0A;
    pub const SCAN_LIMIT: u8 = 0x0B;
    pub const SHUTDOWN: u8 = 0x0C;
    pub const DISPLAY_TEST: u8 = 0x0F;
}

/// Digits a single device can scan
pub const MAX_DIGITS: u8 = 8;

/// Highest intensity (duty cycle 31/32)
pub const MAX_INTENSITY: u8 = 0x0F;

/// MAX7219 on a write-only SPI bus with its own load (CS) pin
pub struct Max7219<SPI, CS> {
    spi: SPI,
    cs: CS,
}

impl<SPI: SpiBus, CS: OutputPin> Max7219<SPI, CS> {
    /// Create a driver; the display stays in whatever state it powered up in
    /// until [`init`](DisplayDriver::init)
    pub fn new(spi: SPI, mut cs: CS) -> Self {
        cs.set_high();
        Self { spi, cs }
    }

    /// Release the bus and CS pin
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }
}

impl<SPI: SpiBus, CS: OutputPin> DisplayDriver for Max7219<SPI, CS> {
    fn write_register(&mut self, address: u8, data: u8) -> Result<(), DisplayError> {
        self.cs.set_low();
        let result = self.spi.write(&[address, data]);
        // Data is latched on the rising edge of LOAD
        self.cs.set_high();
        result.map_err(|_| DisplayError::Bus)
    }

    fn init(&mut self, digits: u8, intensity: u8) -> Result<(), DisplayError> {
        let digits = digits.clamp(1, MAX_DIGITS);

        self.write_register(register::SHUTDOWN, 0)?;
        self.write_register(register::DISPLAY_TEST, 0)?;
        self.write_register(register::SCAN_LIMIT, digits - 1)?;
        self.write_register(register::DECODE_MODE, ((1u16 << digits) - 1) as u8)?;
        for digit in 0..digits {
            self.write_register(FIRST_DIGIT_REGISTER + digit, Symbol::Blank.code())?;
        }
        self.set_intensity(intensity)?;
        self.write_register(register::SHUTDOWN, 1)
    }

    fn set_intensity(&mut self, level: u8) -> Result<(), DisplayError> {
        self.write_register(register::INTENSITY, level.min(MAX_INTENSITY))
    }
}
