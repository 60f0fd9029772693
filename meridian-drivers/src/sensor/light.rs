//! Photo divider with adjust button
//!
//! One ADC pin reads a light-dependent divider; the adjust button shorts
//! the divider to ground, which reads as a near-zero sample.

use meridian_core::traits::AnalogInput;
use meridian_hal::AdcChannel;

/// Light sensor scaled to 8 bits
pub struct LightSensor<ADC> {
    adc: ADC,
    /// Last good reading, reused when a conversion fails
    last: u8,
}

impl<ADC: AdcChannel> LightSensor<ADC> {
    /// Create a sensor
    ///
    /// Until the first successful conversion the sensor reports full
    /// brightness, which can never be mistaken for a button press.
    pub fn new(adc: ADC) -> Self {
        Self {
            adc,
            last: u8::MAX,
        }
    }

    /// Scale a raw conversion to 8 bits
    pub fn scale(raw: u16, resolution_bits: u8) -> u8 {
        let scaled = if resolution_bits > 8 {
            raw >> (resolution_bits - 8)
        } else {
            raw << (8 - resolution_bits)
        };
        scaled.min(u16::from(u8::MAX)) as u8
    }
}

impl<ADC: AdcChannel> AnalogInput for LightSensor<ADC> {
    fn read(&mut self) -> u8 {
        if let Ok(raw) = self.adc.read_raw() {
            self.last = Self::scale(raw, self.adc.resolution_bits());
        }
        self.last
    }
}
