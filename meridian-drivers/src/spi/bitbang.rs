//! Bit-banged write-only SPI master

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use meridian_hal::{OutputPin, SpiBus};

/// Mode 0 SPI on two GPIO pins
///
/// MOSI is set while the clock is low and the slave latches it on the
/// rising edge. The clock idles low.
pub struct BitBangSpi<CLK, MOSI, D> {
    clk: CLK,
    mosi: MOSI,
    delay: D,
    half_period_ns: u32,
}

impl<CLK: OutputPin, MOSI: OutputPin, D: DelayNs> BitBangSpi<CLK, MOSI, D> {
    /// Create a bus; `half_period_ns` is the time the clock spends in each level
    pub fn new(mut clk: CLK, mosi: MOSI, delay: D, half_period_ns: u32) -> Self {
        clk.set_low();
        Self {
            clk,
            mosi,
            delay,
            half_period_ns,
        }
    }

    fn write_byte(&mut self, byte: u8) {
        for bit in (0..8).rev() {
            self.mosi.set_state(byte & (1 << bit) != 0);
            self.delay.delay_ns(self.half_period_ns);
            self.clk.set_high();
            self.delay.delay_ns(self.half_period_ns);
            self.clk.set_low();
        }
    }
}

impl<CLK: OutputPin, MOSI: OutputPin, D: DelayNs> SpiBus for BitBangSpi<CLK, MOSI, D> {
    type Error = Infallible;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        for &byte in data {
            self.write_byte(byte);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use core::cell::{Cell, RefCell};

    use heapless::Vec;

    use super::*;

    struct Mosi<'a>(&'a Cell<bool>);

    impl OutputPin for Mosi<'_> {
        fn set_high(&mut self) {
            self.0.set(true);
        }

        fn set_low(&mut self) {
            self.0.set(false);
        }

        fn is_set_high(&self) -> bool {
            self.0.get()
        }
    }

    /// Clock pin that samples MOSI on each rising edge
    struct Clk<'a> {
        high: bool,
        mosi: &'a Cell<bool>,
        sampled: &'a RefCell<Vec<bool, 64>>,
    }

    impl OutputPin for Clk<'_> {
        fn set_high(&mut self) {
            if !self.high {
                // Vec capacity covers every test transfer
                let _ = self.sampled.borrow_mut().push(self.mosi.get());
            }
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    struct NoDelay;

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    #[test]
    fn test_msb_first() {
        let mosi = Cell::new(false);
        let sampled = RefCell::new(Vec::new());
        let clk = Clk {
            high: false,
            mosi: &mosi,
            sampled: &sampled,
        };
        let mut spi = BitBangSpi::new(clk, Mosi(&mosi), NoDelay, 50);

        spi.write(&[0xA5, 0x01]).unwrap();

        let bits = sampled.borrow();
        assert_eq!(
            bits.as_slice(),
            &[
                true, false, true, false, false, true, false, true, // 0xA5
                false, false, false, false, false, false, false, true, // 0x01
            ]
        );
        // Clock idles low after the transfer
        assert!(!spi.clk.is_set_high());
    }
}
