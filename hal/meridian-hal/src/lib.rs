//! Meridian Hardware Abstraction Layer
//!
//! This crate defines pin-level hardware abstraction traits that can be
//! implemented by chip-specific HALs (RP2040 today). The clock's drivers
//! are written against these traits so they can be exercised on the host
//! with simulated pins.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (meridian-firmware)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  meridian-drivers (soft UART, MAX7219)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  meridian-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ meridian-hal- │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`spi::SpiBus`] - Write-only SPI master
//! - [`adc::AdcChannel`] - Single analog input channel
//!
//! Timing is not abstracted here: drivers take an
//! [`embedded_hal::delay::DelayNs`](https://docs.rs/embedded-hal) directly.

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
pub mod spi;
pub mod storage;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use adc::AdcChannel;
pub use gpio::{InputPin, OutputPin};
pub use spi::SpiBus;
pub use storage::StorageKey;
pub use uart::{BitOrder, UartConfig};
