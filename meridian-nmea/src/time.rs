//! Decoded time values

/// Seconds in one day
const SECONDS_PER_DAY: u32 = 24 * 60 * 60;

/// UT date from the RMC date field (`ddmmyy`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GpsDate {
    /// Day of month (1-31)
    pub day: u8,
    /// Month (1-12)
    pub month: u8,
    /// Two-digit year
    pub year: u8,
}

/// Time of day as reported by the GPS
///
/// Only meaningful when it came out of a successful decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeOfDay {
    /// Hour (0-23)
    pub hour: u8,
    /// Minute (0-59)
    pub minute: u8,
    /// Second (0-59)
    pub second: u8,
    /// Date, present only when date capture is enabled
    pub date: Option<GpsDate>,
}

impl TimeOfDay {
    /// Create a time of day without a date
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
            date: None,
        }
    }

    /// Attach a date
    pub const fn with_date(mut self, date: GpsDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Hour, minute and second in display order
    pub fn fields(&self) -> [u8; 3] {
        [self.hour, self.minute, self.second]
    }

    /// Advance by `seconds`, carrying into minutes and hours
    ///
    /// Wraps at midnight. The date is carried along unchanged.
    pub fn add_seconds(self, seconds: u32) -> Self {
        let total = self.hour as u32 * 3600 + self.minute as u32 * 60 + self.second as u32;
        let total = (total + seconds % SECONDS_PER_DAY) % SECONDS_PER_DAY;

        Self {
            hour: (total / 3600) as u8,
            minute: (total / 60 % 60) as u8,
            second: (total % 60) as u8,
            date: self.date,
        }
    }

    /// Shift the hour by a signed number of hours, wrapping into 0-23
    pub fn shift_hours(self, hours: i8) -> Self {
        let hour = (self.hour as i16 + hours as i16).rem_euclid(24) as u8;
        Self { hour, ..self }
    }
}
