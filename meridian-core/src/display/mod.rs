//! Display frame composition
//!
//! Frames are composed completely in memory and only then committed to
//! the display, so a half-written frame is never visible.

pub mod frame;
pub mod symbol;

pub use frame::{
    compose, compose_fault, compose_no_signal, compose_offset, compose_time, split_digits,
    DisplayBuffer,
};
pub use symbol::Symbol;
