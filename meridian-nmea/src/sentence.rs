//! RMC sentence decoding
//!
//! Single pass, no backtracking:
//! - SEARCH START: discard bytes until '$' (or give up at '\n')
//! - READ TYPE: match the 5-character sentence type, XORing into the checksum
//! - SKIP SENTENCE: another sentence type; discard until '\n'
//! - READ FIELDS: count commas, collect time (and date) digit pairs
//! - CHECKSUM VERIFY: two hex digits after '*'
//!
//! Every byte pulled from the line counts against [`MAX_SENTENCE_LEN`].

use crate::line::SerialLine;
use crate::time::{GpsDate, TimeOfDay};

/// NMEA sentences are limited to 79 characters including '$' and CR/LF
pub const MAX_SENTENCE_LEN: usize = 79;

/// The only sentence type this decoder accepts
pub const SENTENCE_TYPE: &[u8; 5] = b"GPRMC";

/// RMC field positions
mod field {
    /// UTC of position fix
    pub const TIMESTAMP: u8 = 1;
    /// UT date
    pub const DATESTAMP: u8 = 9;
}

/// Outcome category of one decode attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeStatus {
    /// Time was read and the checksum matched
    Success,
    /// RMC sentence with empty time fields (GPS still acquiring)
    NoSignal,
    /// Partial sentence or a different sentence type
    NoMatch,
    /// Calculated checksum did not match the transmitted one
    InvalidChecksum,
    /// Byte budget exhausted before the sentence could be parsed
    BadFormat,
}

impl DecodeStatus {
    /// Check if this status indicates corrupted or missing data
    pub fn is_fault(&self) -> bool {
        matches!(self, DecodeStatus::InvalidChecksum | DecodeStatus::BadFormat)
    }
}

/// Result of one decode attempt
///
/// The time only exists alongside a successful status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Decoded {
    /// Valid RMC sentence with a time fix
    Fix(TimeOfDay),
    /// Valid RMC sentence without time
    NoSignal,
    /// Not a sentence we decode
    NoMatch,
    /// Checksum mismatch
    InvalidChecksum,
    /// Oversized or malformed sentence, or a dead line
    BadFormat,
}

impl Decoded {
    /// Status category of this result
    pub fn status(&self) -> DecodeStatus {
        match self {
            Decoded::Fix(_) => DecodeStatus::Success,
            Decoded::NoSignal => DecodeStatus::NoSignal,
            Decoded::NoMatch => DecodeStatus::NoMatch,
            Decoded::InvalidChecksum => DecodeStatus::InvalidChecksum,
            Decoded::BadFormat => DecodeStatus::BadFormat,
        }
    }

    /// The decoded time, if the decode succeeded
    pub fn time(&self) -> Option<TimeOfDay> {
        match self {
            Decoded::Fix(time) => Some(*time),
            _ => None,
        }
    }
}

/// Decoder configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DecoderConfig {
    /// Also read the `ddmmyy` date field
    pub capture_date: bool,
}

/// Streaming RMC time decoder
///
/// Holds configuration only; all parse state lives inside one
/// [`decode`](Self::decode) call, so consecutive calls are independent.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceDecoder {
    config: DecoderConfig,
}

impl SentenceDecoder {
    /// Create a decoder
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Get the decoder configuration
    pub fn config(&self) -> DecoderConfig {
        self.config
    }

    /// Pull bytes from `line` until one sentence has been decoded or rejected
    ///
    /// Reads at most [`MAX_SENTENCE_LEN`] bytes. A line that never frames a
    /// sentence (disconnected receiver, wrong baud rate) yields
    /// [`Decoded::BadFormat`] once the budget is spent.
    pub fn decode<L: SerialLine + ?Sized>(&self, line: &mut L) -> Decoded {
        let mut parser = SentenceParser::new(self.config);

        for _ in 0..MAX_SENTENCE_LEN {
            if let Some(decoded) = parser.feed(line.read_byte()) {
                return decoded;
            }
        }

        Decoded::BadFormat
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Waiting for '$'
    SearchStart,
    /// Matching the sentence type; holds the number of characters matched
    ReadType(usize),
    /// Wrong sentence type, waiting for '\n'
    SkipSentence,
    /// Inside the comma-delimited fields
    ReadFields,
    /// Collecting the two checksum digits
    ChecksumVerify,
}

/// Two-character scratch buffer for digit pairs
#[derive(Debug, Clone, Copy, Default)]
struct PairBuffer {
    chars: [u8; 2],
    len: usize,
}

impl PairBuffer {
    /// Add a character; returns the pair once two have been collected
    fn push(&mut self, byte: u8) -> Option<[u8; 2]> {
        self.chars[self.len] = byte;
        self.len += 1;

        if self.len == 2 {
            self.len = 0;
            Some(self.chars)
        } else {
            None
        }
    }

    fn clear(&mut self) {
        self.len = 0;
    }
}

/// Up to three two-digit values collected from one field
#[derive(Debug, Clone, Copy, Default)]
struct FieldValues {
    values: [u8; 3],
    len: usize,
}

impl FieldValues {
    /// Store a value; extra pairs beyond three are dropped
    fn push(&mut self, value: u8) -> bool {
        match self.values.get_mut(self.len) {
            Some(slot) => {
                *slot = value;
                self.len += 1;
                true
            }
            None => false,
        }
    }

    fn is_complete(&self) -> bool {
        self.len == self.values.len()
    }
}

/// Byte-at-a-time state machine behind [`SentenceDecoder::decode`]
#[derive(Debug, Clone)]
struct SentenceParser {
    config: DecoderConfig,
    state: ParseState,
    checksum: u8,
    field: u8,
    pair: PairBuffer,
    time: FieldValues,
    date: FieldValues,
    /// Past the decimal point of the timestamp
    hit_time_decimal: bool,
    /// At least one timestamp pair was written
    saw_time: bool,
}

impl SentenceParser {
    fn new(config: DecoderConfig) -> Self {
        Self {
            config,
            state: ParseState::SearchStart,
            checksum: 0,
            field: 0,
            pair: PairBuffer::default(),
            time: FieldValues::default(),
            date: FieldValues::default(),
            hit_time_decimal: false,
            saw_time: false,
        }
    }

    /// Feed a single byte
    ///
    /// Returns `Some` once the sentence has been decoded or rejected.
    fn feed(&mut self, byte: u8) -> Option<Decoded> {
        match self.state {
            ParseState::SearchStart => {
                // A terminator before any '$' means there is nothing to parse
                if byte == b'\n' {
                    return Some(Decoded::NoMatch);
                }
                if byte == b'$' {
                    self.state = ParseState::ReadType(0);
                }
                None
            }
            ParseState::SkipSentence => {
                if byte == b'\n' {
                    Some(Decoded::NoMatch)
                } else {
                    None
                }
            }
            ParseState::ReadType(matched) => {
                self.checksum ^= byte;

                if byte != SENTENCE_TYPE[matched] {
                    self.state = ParseState::SkipSentence;
                } else if matched + 1 == SENTENCE_TYPE.len() {
                    self.state = ParseState::ReadFields;
                } else {
                    self.state = ParseState::ReadType(matched + 1);
                }
                None
            }
            ParseState::ReadFields => {
                // '*' ends the data and is not part of the checksum
                if byte == b'*' {
                    self.pair.clear();
                    self.state = ParseState::ChecksumVerify;
                    return None;
                }

                self.checksum ^= byte;

                if byte == b',' {
                    self.field = self.field.saturating_add(1);
                    self.pair.clear();
                    return None;
                }

                self.read_field_byte(byte);
                None
            }
            ParseState::ChecksumVerify => {
                let digits = self.pair.push(byte)?;

                if hex_pair(digits) != self.checksum {
                    Some(Decoded::InvalidChecksum)
                } else if self.saw_time {
                    Some(Decoded::Fix(self.time_of_day()))
                } else {
                    Some(Decoded::NoSignal)
                }
            }
        }
    }

    fn read_field_byte(&mut self, byte: u8) {
        match self.field {
            field::TIMESTAMP => {
                // Sub-second digits are not modelled
                if self.hit_time_decimal || byte == b'.' {
                    self.hit_time_decimal = true;
                    return;
                }
                if collect_pair(&mut self.pair, &mut self.time, byte) {
                    self.saw_time = true;
                }
            }
            field::DATESTAMP if self.config.capture_date => {
                collect_pair(&mut self.pair, &mut self.date, byte);
            }
            _ => {}
        }
    }

    fn time_of_day(&self) -> TimeOfDay {
        let [hour, minute, second] = self.time.values;
        let time = TimeOfDay::new(hour, minute, second);

        if self.config.capture_date && self.date.is_complete() {
            let [day, month, year] = self.date.values;
            time.with_date(GpsDate { day, month, year })
        } else {
            time
        }
    }
}

/// Collect one character of a digit-pair field, storing each completed pair
///
/// Shared by the timestamp and date fields. Returns true when a value was
/// written.
fn collect_pair(pair: &mut PairBuffer, values: &mut FieldValues, byte: u8) -> bool {
    match pair.push(byte) {
        Some(digits) => values.push(two_digit(digits)),
        None => false,
    }
}

/// Convert two zero-padded ASCII digits to a number
///
/// Non-digit input produces a meaningless value rather than a fault.
fn two_digit([tens, ones]: [u8; 2]) -> u8 {
    tens.wrapping_sub(b'0')
        .wrapping_mul(10)
        .wrapping_add(ones.wrapping_sub(b'0'))
}

/// Convert two uppercase hex characters to a byte
///
/// Characters outside `0-9`/`A-F` contribute a zero nibble.
fn hex_pair(chars: [u8; 2]) -> u8 {
    chars.iter().fold(0u8, |acc, &c| {
        let nibble = match c {
            b'0'..=b'9' => c - b'0',
            b'A'..=b'F' => c - b'A' + 10,
            _ => 0,
        };
        (acc << 4) | nibble
    })
}
