//! Board-agnostic core logic for the GPS clock
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Capability traits (display, persistent store, analog input, edge flags)
//! - Timezone offset arithmetic and button debouncing
//! - Ambient-light brightness estimation
//! - Display frame composition
//! - Control-loop state machine and the clock controller
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod brightness;
pub mod config;
pub mod controller;
pub mod display;
pub mod state;
pub mod timezone;
pub mod traits;

pub use meridian_nmea as nmea;
