//! Local time adjustment
//!
//! A whole-hour offset applied to the decoded UT time, changed by holding
//! the adjust button and persisted across power cycles.

pub mod debounce;
pub mod offset;

pub use debounce::{ButtonStep, Debouncer};
pub use offset::TimezoneOffset;
