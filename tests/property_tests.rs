//! Property-based tests using proptest
//!
//! These tests validate codec invariants across a wide range of randomly
//! generated inputs.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use proptest::prelude::*;
use tobcomm::config::MAX_STRING_BYTES;
use tobcomm::core::integer::{decode_u32_be, encode_u32_be};
use tobcomm::core::string::{decode_string, encode_string, encoded_size};
use tobcomm::error::ProtocolError;
use tobcomm::utils::checksum::{crc32, Crc32};
use tobcomm::utils::hash::{bytes_to_hex, bytes_to_hex_padded};

// Property: any string within the limit survives encode/decode unchanged
proptest! {
    #[test]
    fn prop_string_roundtrip(s in ".{0,512}") {
        let bytes = encode_string(&s).expect("within limit");
        let (decoded, cursor) = decode_string(&bytes, 0).expect("decode");
        prop_assert_eq!(decoded, s);
        prop_assert_eq!(cursor, bytes.len());
    }
}

// Property: encoded_size always equals the real encoded length
proptest! {
    #[test]
    fn prop_encoded_size_matches(s in any::<String>()) {
        prop_assume!(s.len() <= MAX_STRING_BYTES);
        let bytes = encode_string(&s).expect("within limit");
        prop_assert_eq!(encoded_size(&s), bytes.len());
    }
}

// Property: oversized payloads are rejected, never truncated
proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]
    #[test]
    fn prop_oversized_rejected(extra in 1usize..2048) {
        let s = "o".repeat(MAX_STRING_BYTES + extra);
        let is_encoding_error = matches!(
            encode_string(&s),
            Err(ProtocolError::Encoding { .. })
        );
        prop_assert!(is_encoding_error);
    }
}

// Property: every strict prefix of an encoded string is reported as truncated
proptest! {
    #[test]
    fn prop_truncation_detected(s in "[a-z]{1,64}", cut in 0usize..64) {
        let bytes = encode_string(&s).expect("encode");
        let cut = cut % bytes.len();
        let is_truncated = matches!(
            decode_string(&bytes[..cut], 0),
            Err(ProtocolError::TruncatedBuffer { .. })
        );
        prop_assert!(is_truncated);
    }
}

// Property: decoding arbitrary bytes never panics
proptest! {
    #[test]
    fn prop_decode_never_panics(data in prop::collection::vec(any::<u8>(), 0..1024), cursor in 0usize..1100) {
        let _ = decode_string(&data, cursor);
    }
}

// Property: u32 encode/decode are inverses
proptest! {
    #[test]
    fn prop_u32_roundtrip(v in any::<u32>()) {
        prop_assert_eq!(decode_u32_be(&encode_u32_be(v)).expect("4 bytes"), v);
    }
}

// Property: only 4-byte inputs decode
proptest! {
    #[test]
    fn prop_u32_length_enforced(data in prop::collection::vec(any::<u8>(), 0..16)) {
        prop_assert_eq!(decode_u32_be(&data).is_ok(), data.len() == 4);
    }
}

// Property: streaming CRC over any split equals the one-shot CRC
proptest! {
    #[test]
    fn prop_crc_streaming_equivalence(data in prop::collection::vec(any::<u8>(), 0..4096), split in any::<prop::sample::Index>()) {
        let at = split.index(data.len() + 1);
        let mut hasher = Crc32::new();
        hasher.update(&data[..at]).update(&data[at..]);
        prop_assert_eq!(hasher.finalize(), crc32(&data));
    }
}

// Property: hex output width follows the truncation and padding rules
proptest! {
    #[test]
    fn prop_hex_width(data in prop::collection::vec(any::<u8>(), 0..96), width in 0usize..64) {
        prop_assert_eq!(bytes_to_hex(&data, width).len(), 2 * data.len().min(width));
        prop_assert_eq!(bytes_to_hex_padded(&data, width).len(), 2 * width);
    }
}
