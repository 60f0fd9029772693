//! Analog sensor drivers

mod light;

pub use light::LightSensor;
