//! NMEA-0183 time decoding
//!
//! This crate extracts the UTC time of day from the RMC ("recommended
//! minimum") sentence a GPS receiver emits once per second. It is built
//! for a receiver that has nothing but a bit-banged serial line:
//!
//! ```text
//! $GPRMC,081836,A,3751.65,S,14507.36,E,000.0,360.0,130998,011.3,E*62\r\n
//!  └─┬─┘ └─┬──┘                                      └─┬──┘        └┬┘
//!   type  hhmmss[.sss]                             ddmmyy     XOR of the
//!                                                  (optional)  bytes between
//!                                                              '$' and '*'
//! ```
//!
//! The decoder pulls bytes from a [`SerialLine`] one at a time and gives up
//! after [`MAX_SENTENCE_LEN`] bytes, so a silent or babbling line can never
//! stall the caller for longer than one sentence's worth of bytes.

#![no_std]
#![deny(unsafe_code)]

pub mod line;
pub mod sentence;
pub mod time;

pub use line::{SerialLine, SliceLine};
pub use sentence::{
    DecodeStatus, Decoded, DecoderConfig, SentenceDecoder, MAX_SENTENCE_LEN, SENTENCE_TYPE,
};
pub use time::{GpsDate, TimeOfDay};
