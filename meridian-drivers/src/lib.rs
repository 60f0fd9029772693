//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in meridian-core, built on the pin-level traits of meridian-hal:
//!
//! - GPS serial input (bit-sampling software UART)
//! - Write-only bit-banged SPI
//! - Digit display (MAX7219)
//! - Ambient light sensor / adjust button (ADC)

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod sensor;
pub mod serial;
pub mod spi;
