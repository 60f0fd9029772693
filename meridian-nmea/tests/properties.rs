//! Property tests for the RMC decoder

use meridian_nmea::{Decoded, SentenceDecoder, SliceLine, TimeOfDay, MAX_SENTENCE_LEN};
use proptest::prelude::*;

const RMC: &[u8] = b"$GPRMC,081836,A,3751.65,S,14507.36,E,000.0,360.0,130998,011.3,E*62\r\n";

/// Index of the '*' that ends the data section
fn star_index(sentence: &[u8]) -> usize {
    sentence.iter().position(|&b| b == b'*').unwrap()
}

proptest! {
    #[test]
    fn decode_never_reads_past_budget(
        bytes in proptest::collection::vec(any::<u8>(), 0..256),
        idle in any::<u8>(),
    ) {
        let mut line = SliceLine::with_idle(&bytes, idle);
        let _ = SentenceDecoder::default().decode(&mut line);
        prop_assert!(line.consumed() <= MAX_SENTENCE_LEN);
    }

    #[test]
    fn single_bit_flip_in_fields_fails_checksum(
        offset in 0usize..1000,
        bit in 0u8..8,
    ) {
        // Flip a bit between the type (exclusive) and '*' (exclusive).
        // Flips in "GPRMC" itself change the sentence type instead.
        let first = 1 + 5;
        let star = star_index(RMC);
        let index = first + offset % (star - first);

        let mut corrupted = RMC.to_vec();
        corrupted[index] ^= 1 << bit;

        // A flip that manufactures an early '*' moves the checksum field
        prop_assume!(corrupted[index] != b'*');

        let decoded = SentenceDecoder::default().decode(&mut SliceLine::new(&corrupted));
        prop_assert_eq!(decoded, Decoded::InvalidChecksum);
    }

    #[test]
    fn valid_time_fields_round_trip(
        hour in 0u8..24,
        minute in 0u8..60,
        second in 0u8..60,
    ) {
        let body = format!("GPRMC,{:02}{:02}{:02}.00,A,,,,,,,,,,A", hour, minute, second);
        let checksum = body.bytes().fold(0u8, |acc, b| acc ^ b);
        let sentence = format!("${}*{:02X}\r\n", body, checksum);

        let decoded = SentenceDecoder::default().decode(&mut SliceLine::new(sentence.as_bytes()));
        prop_assert_eq!(decoded, Decoded::Fix(TimeOfDay::new(hour, minute, second)));
    }
}

#[test]
fn type_bit_flip_is_no_match() {
    for index in 1..6 {
        let mut corrupted = RMC.to_vec();
        corrupted[index] ^= 0x01;
        let decoded = SentenceDecoder::default().decode(&mut SliceLine::new(&corrupted));
        assert_eq!(decoded, Decoded::NoMatch);
    }
}
