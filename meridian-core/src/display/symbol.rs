//! Digit symbols and their controller codes

/// One character position on a seven-segment display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Symbol {
    /// Decimal digit 0-9; anything larger renders blank
    Digit(u8),
    /// All segments off
    #[default]
    Blank,
    /// Decimal point only
    DecimalPoint,
    /// Middle segment
    Dash,
    /// Letter E
    E,
    /// Letter P
    P,
}

impl Symbol {
    /// Code-B font value written to a digit register
    pub const fn code(self) -> u8 {
        match self {
            Symbol::Digit(d) if d <= 9 => d,
            Symbol::Digit(_) | Symbol::Blank => 0x0F,
            Symbol::Dash => 0x0A,
            Symbol::E => 0x0B,
            Symbol::P => 0x0E,
            Symbol::DecimalPoint => 0x8F,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(Symbol::Digit(0).code(), 0x00);
        assert_eq!(Symbol::Digit(9).code(), 0x09);
        assert_eq!(Symbol::Digit(10).code(), 0x0F);
        assert_eq!(Symbol::Blank.code(), 0x0F);
        assert_eq!(Symbol::Dash.code(), 0x0A);
        assert_eq!(Symbol::E.code(), 0x0B);
        assert_eq!(Symbol::P.code(), 0x0E);
        // Blank with the DP bit set
        assert_eq!(Symbol::DecimalPoint.code(), 0x80 | Symbol::Blank.code());
    }
}
