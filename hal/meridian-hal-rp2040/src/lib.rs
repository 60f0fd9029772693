//! RP2040-specific HAL for the clock firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `meridian-hal` pin traits and the `meridian-core` capability traits:
//!
//! - GPIO newtypes over embassy-rp pins
//! - Blocking ADC channel
//! - Flash-backed byte store (implements `PersistentStore`)
//! - Timepulse / serial edge flags from the IO_BANK0 raw interrupt latches

#![no_std]

pub mod adc;
pub mod edges;
pub mod flash;
pub mod gpio;

pub use adc::RpAdcChannel;
pub use edges::EdgeFlags;
pub use flash::FlashByteStore;
pub use gpio::{RpInput, RpOutput};
