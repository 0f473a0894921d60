//! Property tests for the Radix-64 codec and CRC24.

use proptest::prelude::*;
use radix64::{
    DecodeError, PAD, StreamingDecoder, StreamingEncoder, crc24, decode_to_vec, encode_to_string,
    is_alphabet_char,
};

proptest! {
    #[test]
    fn round_trip(data in prop::collection::vec(any::<u8>(), 0..512)) {
        let encoded = encode_to_string(&data);
        prop_assert_eq!(decode_to_vec(&encoded).unwrap(), data);
    }

    #[test]
    fn length_law(data in prop::collection::vec(any::<u8>(), 0..512)) {
        let encoded = encode_to_string(&data);
        prop_assert_eq!(encoded.len(), 4 * data.len().div_ceil(3));
    }

    #[test]
    fn padding_law(data in prop::collection::vec(any::<u8>(), 0..512)) {
        let encoded = encode_to_string(&data);
        let pads = encoded.bytes().filter(|&b| b == PAD).count();
        let expected = match data.len() % 3 {
            0 => 0,
            1 => 2,
            _ => 1,
        };
        prop_assert_eq!(pads, expected);
        // Pads only ever trail
        prop_assert!(encoded.trim_end_matches('=').bytes().all(is_alphabet_char));
    }

    #[test]
    fn checksum_is_deterministic(data in prop::collection::vec(any::<u8>(), 0..256)) {
        prop_assert_eq!(crc24(&data), crc24(&data.clone()));
        prop_assert!(crc24(&data) <= 0xFF_FFFF);
    }

    #[test]
    fn single_bit_flip_changes_checksum(
        data in prop::collection::vec(any::<u8>(), 1..256),
        index in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let mut corrupted = data.clone();
        let i = index.index(corrupted.len());
        corrupted[i] ^= 1 << bit;
        prop_assert_ne!(crc24(&data), crc24(&corrupted));
    }

    #[test]
    fn bad_length_rejected(text in "[A-Za-z0-9+/]{1,64}") {
        prop_assume!(text.len() % 4 != 0);
        let is_length_error = matches!(
            decode_to_vec(&text),
            Err(DecodeError::InvalidInputLength { .. })
        );
        prop_assert!(is_length_error);
    }

    #[test]
    fn foreign_character_rejected(
        groups in prop::collection::vec(any::<[u8; 3]>(), 1..40),
        index in any::<prop::sample::Index>(),
        bad in any::<u8>().prop_filter("outside the alphabet", |b| !is_alphabet_char(*b) && *b != PAD),
    ) {
        // Whole groups only, so there is no padding to trip over first
        let data = groups.concat();
        let mut encoded = encode_to_string(&data).into_bytes();
        let i = index.index(encoded.len());
        encoded[i] = bad;
        let is_char_error = matches!(
            decode_to_vec(&encoded),
            Err(DecodeError::InvalidCharacter { byte, position }) if byte == bad && position == i
        );
        prop_assert!(is_char_error);
    }

    #[test]
    fn streaming_matches_one_shot(
        data in prop::collection::vec(any::<u8>(), 0..2048),
        chunk in 1usize..64,
    ) {
        let mut encoder = StreamingEncoder::new(Vec::new()).with_chunk_size(chunk);
        encoder.encode(&mut &data[..]).unwrap();
        let encoded = encoder.into_inner();
        let expected = encode_to_string(&data);
        prop_assert_eq!(encoded.as_slice(), expected.as_bytes());

        let mut decoder = StreamingDecoder::new(Vec::new()).with_chunk_size(chunk);
        decoder.decode(&mut &encoded[..]).unwrap();
        prop_assert_eq!(decoder.into_inner(), data);
    }
}
