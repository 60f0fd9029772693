//! State machine for the clock control loop
//!
//! One pass of the loop decodes a sentence, composes a frame and commits
//! it, optionally on the next timepulse. The state machine is explicit,
//! finite, and deterministic.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::State;
