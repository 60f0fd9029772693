//! Timepulse and serial edge flags
//!
//! IO_BANK0 latches every GPIO edge in its raw interrupt status (INTR)
//! registers whether or not the interrupt is enabled. Reading those
//! latches gives a shared flag register for the two lines without an
//! interrupt handler.

use embassy_rp::gpio::Input;
use embassy_rp::pac;
use meridian_core::traits::{EventFlags, LineEvent};

/// GPIOs per INTR register
const PINS_PER_REGISTER: u8 = 8;

/// Edge flags for the GPS timepulse (rising) and serial RX (falling) pins
///
/// Holds the timepulse input so the pad stays configured. The serial pin
/// is owned by the UART receiver and only referenced by number.
pub struct EdgeFlags<'d> {
    _timepulse: Input<'d>,
    timepulse_pin: u8,
    serial_pin: u8,
}

impl<'d> EdgeFlags<'d> {
    /// Watch `timepulse` (GPIO `timepulse_pin`) and GPIO `serial_pin`
    pub fn new(timepulse: Input<'d>, timepulse_pin: u8, serial_pin: u8) -> Self {
        Self {
            _timepulse: timepulse,
            timepulse_pin,
            serial_pin,
        }
    }

    fn location(pin: u8) -> (usize, usize) {
        (
            usize::from(pin / PINS_PER_REGISTER),
            usize::from(pin % PINS_PER_REGISTER),
        )
    }

    fn rising_latched(pin: u8) -> bool {
        let (register, index) = Self::location(pin);
        pac::IO_BANK0.intr(register).read().edge_high(index)
    }

    fn falling_latched(pin: u8) -> bool {
        let (register, index) = Self::location(pin);
        pac::IO_BANK0.intr(register).read().edge_low(index)
    }

    fn clear_pin(pin: u8) {
        let (register, index) = Self::location(pin);
        // Write-one-to-clear
        pac::IO_BANK0.intr(register).write(|w| {
            w.set_edge_high(index, true);
            w.set_edge_low(index, true);
        });
    }
}

impl EventFlags for EdgeFlags<'_> {
    fn clear(&mut self) {
        Self::clear_pin(self.timepulse_pin);
        Self::clear_pin(self.serial_pin);
    }

    fn poll(&mut self) -> Option<LineEvent> {
        // A start bit that is already under way makes the frame stale
        if Self::falling_latched(self.serial_pin) {
            Some(LineEvent::SerialActivity)
        } else if Self::rising_latched(self.timepulse_pin) {
            Some(LineEvent::Timepulse)
        } else {
            None
        }
    }
}
