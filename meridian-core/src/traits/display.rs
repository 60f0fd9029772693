//! Digit display driver trait

use crate::display::DisplayBuffer;

/// Register address of the leftmost digit; digit `i` lives at `FIRST + i`
pub const FIRST_DIGIT_REGISTER: u8 = 1;

/// Errors that can occur with display communication
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// The bus to the display controller failed
    Bus,
}

/// Trait for a register-addressed digit display controller
///
/// Data written to digit registers is a symbol code from
/// [`Symbol::code`](crate::display::Symbol::code).
pub trait DisplayDriver {
    /// Write one register
    fn write_register(&mut self, address: u8, data: u8) -> Result<(), DisplayError>;

    /// Configure the controller for `digits` digits and switch it on
    ///
    /// All digits are blanked before the display is enabled.
    fn init(&mut self, digits: u8, intensity: u8) -> Result<(), DisplayError>;

    /// Set the display intensity (duty cycle level)
    fn set_intensity(&mut self, level: u8) -> Result<(), DisplayError>;
}

/// Helper trait for committing whole frames
pub trait DisplayExt: DisplayDriver {
    /// Write every digit of a fully composed buffer, leftmost first
    fn show<const N: usize>(&mut self, buffer: &DisplayBuffer<N>) -> Result<(), DisplayError> {
        for (address, code) in (FIRST_DIGIT_REGISTER..).zip(buffer.codes()) {
            self.write_register(address, code)?;
        }
        Ok(())
    }
}

// Blanket implementation for all DisplayDriver types
impl<T: DisplayDriver + ?Sized> DisplayExt for T {}
