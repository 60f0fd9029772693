//! Configuration types
//!
//! Board-agnostic tuning for the clock. Boards build a [`ClockConfig`]
//! at startup; the defaults match the reference hardware.

use heapless::Vec;
use meridian_nmea::DecoderConfig;

/// Maximum number of brightness levels
pub const MAX_BRIGHTNESS_LEVELS: usize = 16;

/// Store address of the persisted timezone offset
pub const TIMEZONE_OFFSET_ADDRESS: u8 = 0;

/// Ambient-light thresholds for the reference photo divider
///
/// Level `i` is selected when the averaged reading is at most entry `i`.
pub const DEFAULT_BRIGHTNESS_THRESHOLDS: [u8; MAX_BRIGHTNESS_LEVELS] = [
    24, 32, 40, 48, 60, 72, 84, 96, 112, 128, 144, 160, 180, 200, 224, 255,
];

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Threshold table has no entries
    EmptyThresholds,
    /// Threshold table longer than [`MAX_BRIGHTNESS_LEVELS`]
    TooManyThresholds,
    /// Threshold table is not strictly increasing
    ThresholdsNotIncreasing,
    /// Initial intensity has no entry in the threshold table
    InitialIntensityOutOfRange,
    /// Debounce window of zero samples
    ZeroDebounceWindow,
}

/// Adjust-button debounce tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceConfig {
    /// Samples below this value count as "pressed"
    pub threshold: u8,
    /// Consecutive pressed samples needed for one increment
    pub window: u8,
    /// Pause between samples while the button is held
    pub sample_interval_ms: u32,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            threshold: 8,
            window: 20,
            sample_interval_ms: 10,
        }
    }
}

/// Ambient-light to intensity mapping
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BrightnessConfig {
    thresholds: Vec<u8, MAX_BRIGHTNESS_LEVELS>,
    initial_intensity: u8,
}

impl BrightnessConfig {
    /// Build a mapping from a strictly increasing threshold table
    pub fn new(thresholds: &[u8], initial_intensity: u8) -> Result<Self, ConfigError> {
        if thresholds.is_empty() {
            return Err(ConfigError::EmptyThresholds);
        }
        if thresholds.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::ThresholdsNotIncreasing);
        }
        if usize::from(initial_intensity) >= thresholds.len() {
            return Err(ConfigError::InitialIntensityOutOfRange);
        }
        let thresholds =
            Vec::from_slice(thresholds).map_err(|_| ConfigError::TooManyThresholds)?;
        Ok(Self {
            thresholds,
            initial_intensity,
        })
    }

    /// Threshold table, one entry per intensity level
    pub fn thresholds(&self) -> &[u8] {
        &self.thresholds
    }

    /// Intensity used until the first ambient sample arrives
    pub fn initial_intensity(&self) -> u8 {
        self.initial_intensity
    }
}

impl Default for BrightnessConfig {
    fn default() -> Self {
        Self {
            thresholds: Vec::from_iter(DEFAULT_BRIGHTNESS_THRESHOLDS),
            initial_intensity: 12,
        }
    }
}

/// Complete clock configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockConfig {
    /// Sentence decoder options
    pub decoder: DecoderConfig,
    /// Adjust-button debounce
    pub debounce: DebounceConfig,
    /// Brightness mapping
    pub brightness: BrightnessConfig,
    /// Seconds added to each fix before display
    ///
    /// The sentence describes the second that just started; the display
    /// is committed on the following timepulse.
    pub latency_compensation_s: u8,
    /// Hold valid frames until the next timepulse edge
    pub align_to_timepulse: bool,
    /// Consume the CR/LF after a valid sentence before arming the edge flags
    pub drain_line_end: bool,
}

impl ClockConfig {
    /// Check cross-field constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.debounce.window == 0 {
            return Err(ConfigError::ZeroDebounceWindow);
        }
        Ok(())
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            decoder: DecoderConfig::default(),
            debounce: DebounceConfig::default(),
            brightness: BrightnessConfig::default(),
            latency_compensation_s: 1,
            align_to_timepulse: true,
            drain_line_end: true,
        }
    }
}
