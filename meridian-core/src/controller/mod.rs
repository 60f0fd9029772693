//! Clock controller
//!
//! Runs one decode / compose / commit cycle per call. Between valid
//! fixes the idle time is spent sampling the shared analog input for
//! ambient brightness or the timezone adjust button.

#[cfg(test)]
mod tests;

use embedded_hal::delay::DelayNs;
use meridian_nmea::{DecodeStatus, Decoded, SentenceDecoder, TimeOfDay};

use crate::brightness::BrightnessEstimator;
use crate::config::{ClockConfig, TIMEZONE_OFFSET_ADDRESS};
use crate::display::{compose, compose_no_signal, compose_offset, DisplayBuffer};
use crate::state::{Event, State};
use crate::timezone::{ButtonStep, Debouncer, TimezoneOffset};
use crate::traits::{
    AnalogInput, DisplayDriver, DisplayError, DisplayExt, EventFlags, LineEvent, PersistentStore,
    SerialLine, StoreError,
};

/// Errors that abandon a cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockError {
    /// Display write failed
    Display(DisplayError),
    /// Persisting the timezone offset failed
    Store(StoreError),
}

impl From<DisplayError> for ClockError {
    fn from(e: DisplayError) -> Self {
        ClockError::Display(e)
    }
}

impl From<StoreError> for ClockError {
    fn from(e: StoreError) -> Self {
        ClockError::Store(e)
    }
}

/// What one cycle did to the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleOutcome {
    /// Not an RMC sentence; the display was left alone
    Skipped,
    /// A frame for this status was written
    Committed(DecodeStatus),
    /// A new sentence began before the timepulse; the frame was dropped
    Deferred,
}

/// Peripherals the controller drives
pub struct ClockIo<L, D, S, A, F, T> {
    /// GPS serial line
    pub serial: L,
    /// Digit display
    pub display: D,
    /// Timezone offset storage
    pub store: S,
    /// Light sensor / adjust button
    pub analog: A,
    /// Timepulse and serial edge flags
    pub events: F,
    /// Blocking delay for button sampling
    pub delay: T,
}

/// Drives an `N`-digit clock display from a GPS receiver
pub struct ClockController<L, D, S, A, F, T, const N: usize> {
    io: ClockIo<L, D, S, A, F, T>,
    config: ClockConfig,
    decoder: SentenceDecoder,
    brightness: BrightnessEstimator,
    debouncer: Debouncer,
    offset: TimezoneOffset,
    intensity: u8,
    phase: u8,
    state: State,
    last_fix: Option<TimeOfDay>,
}

impl<L, D, S, A, F, T, const N: usize> ClockController<L, D, S, A, F, T, N>
where
    L: SerialLine,
    D: DisplayDriver,
    S: PersistentStore,
    A: AnalogInput,
    F: EventFlags,
    T: DelayNs,
{
    /// Digit count as the display registers see it
    const DIGITS: u8 = {
        assert!(N > 0 && N <= u8::MAX as usize, "digit count must be 1..=255");
        N as u8
    };

    /// Create a controller and load the persisted timezone offset
    pub fn new(mut io: ClockIo<L, D, S, A, F, T>, config: ClockConfig) -> Self {
        let offset = TimezoneOffset::load(&mut io.store, TIMEZONE_OFFSET_ADDRESS);

        Self {
            io,
            decoder: SentenceDecoder::new(config.decoder),
            brightness: BrightnessEstimator::new(config.brightness.clone()),
            debouncer: Debouncer::new(config.debounce),
            intensity: config.brightness.initial_intensity(),
            config,
            offset,
            phase: 0,
            state: State::Idle,
            last_fix: None,
        }
    }

    /// Initialize the display and show the no-signal frame
    pub fn start(&mut self) -> Result<(), ClockError> {
        self.io.display.init(Self::DIGITS, self.intensity)?;
        self.show_no_signal()?;
        Ok(())
    }

    /// Run one decode / compose / commit cycle
    ///
    /// On error the cycle is abandoned and the state returns to idle.
    pub fn run_cycle(&mut self) -> Result<CycleOutcome, ClockError> {
        let result = self.cycle();
        if result.is_err() {
            self.apply(Event::IoFault);
        }
        result
    }

    fn cycle(&mut self) -> Result<CycleOutcome, ClockError> {
        self.apply(Event::BeginDecode);
        let decoded = self.decoder.decode(&mut self.io.serial);
        let status = decoded.status();
        self.apply(Event::Decoded(status));

        // Time between fixes is spent on the analog input
        if status != DecodeStatus::Success {
            self.sample_analog()?;
        }

        let view = match decoded {
            Decoded::Fix(utc) => {
                let local = self
                    .offset
                    .apply(utc.add_seconds(u32::from(self.config.latency_compensation_s)));
                self.last_fix = Some(local);
                Decoded::Fix(local)
            }
            other => other,
        };

        let Some(frame) = compose::<N>(&view, self.phase) else {
            return Ok(CycleOutcome::Skipped);
        };
        if status == DecodeStatus::NoSignal {
            self.advance_phase();
        }

        let await_timepulse = status == DecodeStatus::Success && self.config.align_to_timepulse;
        self.apply(Event::Composed { await_timepulse });

        if await_timepulse {
            if self.config.drain_line_end {
                self.drain_line_end();
            }
            match self.wait_for_edge() {
                LineEvent::Timepulse => self.apply(Event::Timepulse),
                LineEvent::SerialActivity => {
                    self.apply(Event::SerialActivity);
                    return Ok(CycleOutcome::Deferred);
                }
            }
        }

        self.io.display.show(&frame)?;
        self.apply(Event::Committed);
        Ok(CycleOutcome::Committed(status))
    }

    fn apply(&mut self, event: Event) {
        self.state = self.state.transition(event);
    }

    fn advance_phase(&mut self) {
        self.phase = (self.phase + 1) % Self::DIGITS;
    }

    fn show_no_signal(&mut self) -> Result<(), ClockError> {
        let frame: DisplayBuffer<N> = compose_no_signal(self.phase);
        self.io.display.show(&frame)?;
        self.advance_phase();
        Ok(())
    }

    /// Swallow the CR/LF that follows the checksum
    ///
    /// Those bytes would otherwise latch serial activity before the
    /// timepulse arrives.
    fn drain_line_end(&mut self) {
        for _ in 0..2 {
            if self.io.serial.read_byte() == b'\n' {
                break;
            }
        }
    }

    /// Clear the edge flags and spin until one of the lines fires
    fn wait_for_edge(&mut self) -> LineEvent {
        self.io.events.clear();
        loop {
            if let Some(event) = self.io.events.poll() {
                return event;
            }
            core::hint::spin_loop();
        }
    }

    fn sample_analog(&mut self) -> Result<(), ClockError> {
        let sample = self.io.analog.read();
        if self.debouncer.is_asserted(sample) {
            return self.adjust_timezone(sample);
        }

        let level = self.brightness.observe(sample);
        if level != self.intensity {
            self.io.display.set_intensity(level)?;
            self.intensity = level;
        }
        Ok(())
    }

    /// Track a button press until release
    ///
    /// Every full debounce window advances the offset and shows it. The
    /// offset is persisted once on release, and only if it changed.
    fn adjust_timezone(&mut self, first_sample: u8) -> Result<(), ClockError> {
        let before = self.offset;
        let interval_ms = self.config.debounce.sample_interval_ms;

        self.debouncer.reset();
        let mut step = self.debouncer.sample(first_sample);
        while step != ButtonStep::Released {
            if step == ButtonStep::Fire {
                self.offset = self.offset.increment();
                let frame: DisplayBuffer<N> = compose_offset(self.offset);
                self.io.display.show(&frame)?;
            }
            self.io.delay.delay_ms(interval_ms);
            step = self.debouncer.sample(self.io.analog.read());
        }

        if self.offset != before {
            self.io
                .store
                .write(TIMEZONE_OFFSET_ADDRESS, self.offset.to_stored())?;
        }
        Ok(())
    }

    /// Current control loop state
    pub fn state(&self) -> State {
        self.state
    }

    /// Active timezone offset
    pub fn offset(&self) -> TimezoneOffset {
        self.offset
    }

    /// Last intensity level written to the display
    pub fn intensity(&self) -> u8 {
        self.intensity
    }

    /// Local time of the most recent valid fix
    pub fn last_fix(&self) -> Option<TimeOfDay> {
        self.last_fix
    }

    /// Configuration in use
    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    /// Borrow the peripherals
    pub fn io(&self) -> &ClockIo<L, D, S, A, F, T> {
        &self.io
    }

    /// Give back the peripherals
    pub fn into_io(self) -> ClockIo<L, D, S, A, F, T> {
        self.io
    }
}
