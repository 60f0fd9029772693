//! Adjust-button debouncer

use crate::config::DebounceConfig;

/// Result of feeding one sample to the [`Debouncer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonStep {
    /// Sample is above the press threshold; the hold count restarts
    Released,
    /// Still pressed, window not yet full
    Held,
    /// A full window of pressed samples; the count restarts
    Fire,
}

/// Counts consecutive low samples on the analog input
///
/// Holding the button fires once every `window` samples. Any sample at
/// or above the threshold cancels the partial count, so a dip shorter
/// than a window never fires.
#[derive(Debug, Clone)]
pub struct Debouncer {
    config: DebounceConfig,
    held: u8,
}

impl Debouncer {
    /// Create a debouncer with no samples counted
    pub fn new(config: DebounceConfig) -> Self {
        Self { config, held: 0 }
    }

    /// Check whether a sample reads as "pressed"
    pub fn is_asserted(&self, sample: u8) -> bool {
        sample < self.config.threshold
    }

    /// Feed one sample
    pub fn sample(&mut self, sample: u8) -> ButtonStep {
        if !self.is_asserted(sample) {
            self.held = 0;
            return ButtonStep::Released;
        }

        self.held = self.held.saturating_add(1);
        if self.held >= self.config.window {
            self.held = 0;
            ButtonStep::Fire
        } else {
            ButtonStep::Held
        }
    }

    /// Drop any partial count
    pub fn reset(&mut self) {
        self.held = 0;
    }

    /// Pressed samples counted toward the next increment
    pub fn held(&self) -> u8 {
        self.held
    }

    /// Debounce tuning in use
    pub fn config(&self) -> &DebounceConfig {
        &self.config
    }
}
