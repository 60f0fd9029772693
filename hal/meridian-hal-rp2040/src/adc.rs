//! ADC channel
//!
//! RP2040 has a single 12-bit ADC with inputs on GPIO26-29. The clock
//! owns the converter outright, so each channel wrapper holds it.

use embassy_rp::adc::{Adc, Blocking, Channel, Error};

/// RP2040 ADC resolution
pub const ADC_BITS: u8 = 12;

/// One ADC input read with blocking conversions
pub struct RpAdcChannel<'d> {
    adc: Adc<'d, Blocking>,
    channel: Channel<'d>,
}

impl<'d> RpAdcChannel<'d> {
    /// Pair the converter with the channel to sample
    pub fn new(adc: Adc<'d, Blocking>, channel: Channel<'d>) -> Self {
        Self { adc, channel }
    }
}

impl meridian_hal::AdcChannel for RpAdcChannel<'_> {
    type Error = Error;

    fn read_raw(&mut self) -> Result<u16, Self::Error> {
        self.adc.blocking_read(&mut self.channel)
    }

    fn resolution_bits(&self) -> u8 {
        ADC_BITS
    }
}
