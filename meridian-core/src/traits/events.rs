//! Edge flags shared by the serial line and the timepulse line

/// Edge condition latched by the hardware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineEvent {
    /// Rising edge on the GPS 1 Hz timepulse output
    Timepulse,
    /// Start-bit edge on the serial line
    SerialActivity,
}

/// Latched edge flags for the timepulse and serial lines
///
/// Implementations typically sit on a shared pin-change flag register.
pub trait EventFlags {
    /// Forget every edge latched so far
    fn clear(&mut self);

    /// Report a latched edge without blocking
    ///
    /// If both lines have fired since the last [`clear`](Self::clear),
    /// whichever the implementation observes first wins.
    fn poll(&mut self) -> Option<LineEvent>;
}
