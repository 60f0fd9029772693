//! Display drivers

pub mod max7219;

pub use max7219::Max7219;
