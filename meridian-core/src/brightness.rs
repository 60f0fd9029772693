//! Ambient-light brightness estimation
//!
//! Light samples are smoothed by a fixed-window running average and then
//! mapped to a display intensity level through a threshold table.

use crate::config::BrightnessConfig;

/// Samples in the smoothing window
pub const SAMPLE_WINDOW: usize = 16;

/// Running average over the last `K` samples
///
/// `K` must be a power of two. The first sample fills the whole window,
/// so the average starts at that sample instead of ramping up from zero.
#[derive(Debug, Clone)]
pub struct RunningAverage<const K: usize> {
    samples: [u8; K],
    next: usize,
    sum: u32,
    primed: bool,
}

impl<const K: usize> RunningAverage<K> {
    const MASK: usize = {
        assert!(K.is_power_of_two(), "window must be a power of two");
        K - 1
    };
    const SHIFT: u32 = K.trailing_zeros();

    /// Create an empty average
    pub const fn new() -> Self {
        Self {
            samples: [0; K],
            next: 0,
            sum: 0,
            primed: false,
        }
    }

    /// Add a sample, evicting the oldest, and return the new average
    pub fn push(&mut self, sample: u8) -> u8 {
        if !self.primed {
            self.samples = [sample; K];
            self.sum = u32::from(sample) << Self::SHIFT;
            self.primed = true;
            return sample;
        }

        let oldest = self.samples[self.next];
        self.sum = self.sum - u32::from(oldest) + u32::from(sample);
        self.samples[self.next] = sample;
        self.next = (self.next + 1) & Self::MASK;
        self.average()
    }

    /// Current average, zero before the first sample
    pub fn average(&self) -> u8 {
        (self.sum >> Self::SHIFT) as u8
    }
}

impl<const K: usize> Default for RunningAverage<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps smoothed ambient light to a display intensity level
#[derive(Debug, Clone)]
pub struct BrightnessEstimator {
    average: RunningAverage<SAMPLE_WINDOW>,
    config: BrightnessConfig,
}

impl BrightnessEstimator {
    /// Create an estimator for the given threshold table
    pub fn new(config: BrightnessConfig) -> Self {
        Self {
            average: RunningAverage::new(),
            config,
        }
    }

    /// Feed one light sample and return the intensity level to use
    pub fn observe(&mut self, sample: u8) -> u8 {
        let average = self.average.push(sample);
        self.level_for(average)
    }

    /// Lowest level whose threshold is at least `average`
    ///
    /// Averages above the last threshold clamp to the top level.
    pub fn level_for(&self, average: u8) -> u8 {
        let thresholds = self.config.thresholds();
        let level = thresholds
            .iter()
            .position(|&threshold| average <= threshold)
            .unwrap_or(thresholds.len().saturating_sub(1));
        level as u8
    }

    /// Current smoothed reading
    pub fn average(&self) -> u8 {
        self.average.average()
    }
}
