//! Whole-hour timezone offset

use meridian_nmea::TimeOfDay;

use crate::traits::PersistentStore;

/// Signed whole-hour offset from UT, always within `MIN..=MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimezoneOffset(i8);

impl TimezoneOffset {
    /// Westernmost offset
    pub const MIN: i8 = -12;
    /// Easternmost offset
    pub const MAX: i8 = 13;
    /// No offset
    pub const UTC: Self = Self(0);

    /// Create an offset, rejecting values outside `MIN..=MAX`
    pub const fn new(hours: i8) -> Option<Self> {
        if hours >= Self::MIN && hours <= Self::MAX {
            Some(Self(hours))
        } else {
            None
        }
    }

    /// Offset in hours
    pub const fn hours(self) -> i8 {
        self.0
    }

    /// Next offset in button order; `MAX` wraps to `MIN`
    pub const fn increment(self) -> Self {
        if self.0 >= Self::MAX {
            Self(Self::MIN)
        } else {
            Self(self.0 + 1)
        }
    }

    /// Convert a UT time to local time
    ///
    /// Only the hour changes; the result wraps within 0-23.
    pub fn apply(self, time: TimeOfDay) -> TimeOfDay {
        time.shift_hours(self.0)
    }

    /// Decode a stored byte (two's complement)
    pub const fn from_stored(byte: u8) -> Option<Self> {
        Self::new(byte as i8)
    }

    /// Encode for storage (two's complement)
    pub const fn to_stored(self) -> u8 {
        self.0 as u8
    }

    /// Load the persisted offset
    ///
    /// An unreadable, never-written or out-of-range value loads as UTC.
    pub fn load<S: PersistentStore + ?Sized>(store: &mut S, address: u8) -> Self {
        store
            .read(address)
            .ok()
            .and_then(Self::from_stored)
            .unwrap_or(Self::UTC)
    }
}
