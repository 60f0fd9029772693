//! Combined light sensor / button input

/// Analog input shared by the light sensor and the adjust button
///
/// Low readings mean the button is pulling the divider down; mid-to-high
/// readings are ambient light, higher meaning brighter.
pub trait AnalogInput {
    /// Take one 8-bit sample
    fn read(&mut self) -> u8;
}
