//! Events that trigger state transitions

use meridian_nmea::DecodeStatus;

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Decode events
    /// Start reading the next sentence
    BeginDecode,
    /// Decode attempt finished
    Decoded(DecodeStatus),

    // Frame events
    /// Frame composed; `await_timepulse` holds it for the next edge
    Composed { await_timepulse: bool },
    /// Frame written to the display
    Committed,

    // Line events
    /// Timepulse edge seen while holding a frame
    Timepulse,
    /// Serial start bit seen while holding a frame
    SerialActivity,

    // Fault events
    /// Display or store I/O failed mid-cycle
    IoFault,
}
