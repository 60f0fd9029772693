//! Hardware capability traits
//!
//! These traits define the interface between the clock logic and
//! hardware-specific implementations. Every method is blocking; the
//! controller runs a single cooperative loop.

pub mod analog;
pub mod display;
pub mod events;
pub mod storage;

pub use analog::AnalogInput;
pub use display::{DisplayDriver, DisplayError, DisplayExt, FIRST_DIGIT_REGISTER};
pub use events::{EventFlags, LineEvent};
pub use meridian_nmea::SerialLine;
pub use storage::{PersistentStore, StoreError};
