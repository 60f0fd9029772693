//! State machine definition
//!
//! What the controller does next is a function of the current state and
//! an event.

use meridian_nmea::DecodeStatus;

use super::events::Event;

/// Control loop states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Between cycles
    #[default]
    Idle,
    /// Reading a sentence from the serial line
    Decoding,
    /// Sentence read, frame not yet composed
    Decoded(DecodeStatus),
    /// Holding a valid-time frame until the next timepulse
    AwaitTimepulse,
    /// Writing the frame to the display
    Committing,
}

impl State {
    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        match (self, event) {
            // Decode transitions
            (State::Idle, Event::BeginDecode) => State::Decoding,
            (State::Decoded(DecodeStatus::NoMatch), Event::BeginDecode) => State::Decoding,
            (State::Decoding, Event::Decoded(status)) => State::Decoded(status),

            // Compose transitions; NoMatch never composes a frame
            (State::Decoded(status), Event::Composed { await_timepulse })
                if status != DecodeStatus::NoMatch =>
            {
                if await_timepulse {
                    State::AwaitTimepulse
                } else {
                    State::Committing
                }
            }

            // Timepulse alignment
            (State::AwaitTimepulse, Event::Timepulse) => State::Committing,
            (State::AwaitTimepulse, Event::SerialActivity) => State::Idle,

            (State::Committing, Event::Committed) => State::Idle,

            // I/O failure abandons the cycle
            (_, Event::IoFault) => State::Idle,

            // Default: stay in current state
            _ => self,
        }
    }
}
