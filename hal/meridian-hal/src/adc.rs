//! Analog input abstractions

/// A single ADC channel
///
/// Takes `&mut self` because ADC reads typically require mutable access
/// to the converter.
pub trait AdcChannel {
    /// Error type for conversions
    type Error;

    /// Perform one conversion and return the raw result
    fn read_raw(&mut self) -> Result<u16, Self::Error>;

    /// Converter resolution in bits (12 on the RP2040)
    fn resolution_bits(&self) -> u8;
}
