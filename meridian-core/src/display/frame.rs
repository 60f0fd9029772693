//! Frame buffers and the views composed into them

use meridian_nmea::{DecodeStatus, Decoded, TimeOfDay};

use super::symbol::Symbol;
use crate::timezone::TimezoneOffset;

/// One complete frame for an `N`-digit display, leftmost digit first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayBuffer<const N: usize> {
    symbols: [Symbol; N],
}

impl<const N: usize> DisplayBuffer<N> {
    /// All digits blank
    pub const fn blank() -> Self {
        Self {
            symbols: [Symbol::Blank; N],
        }
    }

    /// Set one position; positions past the display width are ignored
    pub fn set(&mut self, index: usize, symbol: Symbol) {
        if let Some(slot) = self.symbols.get_mut(index) {
            *slot = symbol;
        }
    }

    /// Symbols in display order
    pub fn symbols(&self) -> &[Symbol; N] {
        &self.symbols
    }

    /// Controller codes in display order
    pub fn codes(&self) -> [u8; N] {
        self.symbols.map(Symbol::code)
    }
}

impl<const N: usize> Default for DisplayBuffer<N> {
    fn default() -> Self {
        Self::blank()
    }
}

/// Split a value below 100 into tens and ones
pub fn split_digits(mut value: u8) -> (u8, u8) {
    let mut tens = 0;
    while value >= 10 {
        value -= 10;
        tens += 1;
    }
    (tens, value)
}

/// `HHMMSS`
pub fn compose_time<const N: usize>(time: &TimeOfDay) -> DisplayBuffer<N> {
    let mut frame = DisplayBuffer::blank();
    for (pair, value) in time.fields().into_iter().enumerate() {
        let (tens, ones) = split_digits(value);
        frame.set(pair * 2, Symbol::Digit(tens));
        frame.set(pair * 2 + 1, Symbol::Digit(ones));
    }
    frame
}

/// Single decimal point that walks one position per call
pub fn compose_no_signal<const N: usize>(phase: u8) -> DisplayBuffer<N> {
    let mut frame = DisplayBuffer::blank();
    if N > 0 {
        frame.set(usize::from(phase) % N, Symbol::DecimalPoint);
    }
    frame
}

/// `E` followed by a one-digit error code
pub fn compose_fault<const N: usize>(code: u8) -> DisplayBuffer<N> {
    let mut frame = DisplayBuffer::blank();
    frame.set(0, Symbol::E);
    frame.set(1, Symbol::Digit(code));
    frame
}

/// Sign (`P` or `-`) followed by the two-digit magnitude
pub fn compose_offset<const N: usize>(offset: TimezoneOffset) -> DisplayBuffer<N> {
    let hours = offset.hours();
    let sign = if hours < 0 { Symbol::Dash } else { Symbol::P };
    let (tens, ones) = split_digits(hours.unsigned_abs());

    let mut frame = DisplayBuffer::blank();
    frame.set(0, sign);
    frame.set(1, Symbol::Digit(tens));
    frame.set(2, Symbol::Digit(ones));
    frame
}

/// Error code shown for a decode fault
fn fault_code(status: DecodeStatus) -> Option<u8> {
    match status {
        DecodeStatus::InvalidChecksum => Some(1),
        DecodeStatus::BadFormat => Some(2),
        _ => None,
    }
}

/// Compose the frame for one decode result
///
/// Returns `None` for [`Decoded::NoMatch`]: the current frame stays up.
pub fn compose<const N: usize>(decoded: &Decoded, phase: u8) -> Option<DisplayBuffer<N>> {
    match decoded {
        Decoded::Fix(time) => Some(compose_time(time)),
        Decoded::NoSignal => Some(compose_no_signal(phase)),
        Decoded::NoMatch => None,
        Decoded::InvalidChecksum | Decoded::BadFormat => {
            fault_code(decoded.status()).map(compose_fault)
        }
    }
}
