//! Known-vector tests for CRC-32, SHA-256 and hex rendering

#![allow(clippy::expect_used, clippy::unwrap_used)]

use tobcomm::config::{HashConfig, DEFAULT_HEX_WIDTH};
use tobcomm::utils::checksum::{crc32, crc32_str, ChecksumInput, Crc32};
use tobcomm::utils::hash::{
    bytes_to_hex, bytes_to_hex_padded, render_hex, sha256, sha256_bytes, sha256_hex, HexPadding,
};

#[test]
fn test_crc32_standard_vectors() {
    assert_eq!(crc32(b""), 0);
    assert_eq!(crc32(b"123456789"), 0xCBF4_3926);
    assert_eq!(crc32(b"a"), 0xE8B7_BE43);
    assert_eq!(crc32(&[0u8; 32]), 0x190A_55AD);
}

#[test]
fn test_crc32_repeatable() {
    let data = b"TobComm payload";
    let first = crc32(data);
    for _ in 0..100 {
        assert_eq!(crc32(data), first);
    }
}

#[test]
fn test_crc32_streaming_chunks() {
    let data: Vec<u8> = (0..=255u8).cycle().take(10_000).collect();
    let mut hasher = Crc32::new();
    for chunk in data.chunks(7) {
        hasher.update(chunk);
    }
    assert_eq!(hasher.finalize(), crc32(&data));
}

#[test]
fn test_crc32_text_modes() {
    assert_eq!(crc32_str("", ChecksumInput::Utf16Legacy), 0);
    assert_eq!(crc32_str("hello", ChecksumInput::Utf8), crc32(b"hello"));
    assert_eq!(
        crc32_str("hello", ChecksumInput::Utf16Legacy),
        crc32(b"hello")
    );
    // Astral chars are two surrogate code units in the legacy mode
    let legacy = crc32_str("🚀", ChecksumInput::Utf16Legacy);
    let units: Vec<u8> = "🚀".encode_utf16().map(|u| u as u8).collect();
    assert_eq!(units.len(), 2);
    assert_eq!(legacy, crc32(&units));
}

#[test]
fn test_sha256_vectors() {
    assert_eq!(
        hex_of(&sha256("")),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    assert_eq!(
        sha256_hex("The quick brown fox jumps over the lazy dog"),
        "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592"
    );
    assert_eq!(sha256("abc"), sha256_bytes(b"abc"));
}

#[test]
fn test_digest_renders_to_64_chars() {
    let digest = sha256("Counterforce");
    assert_eq!(bytes_to_hex(&digest, DEFAULT_HEX_WIDTH).len(), 64);
    assert_eq!(bytes_to_hex(&digest, DEFAULT_HEX_WIDTH), sha256_hex("Counterforce"));
}

#[test]
fn test_hex_width_rules() {
    let data = [0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef];
    assert_eq!(bytes_to_hex(&data, 4), "01234567");
    assert_eq!(bytes_to_hex(&data, 100), "0123456789abcdef");
    assert_eq!(bytes_to_hex_padded(&data, 4), "01234567");
    assert_eq!(bytes_to_hex_padded(&data, 10), "0123456789abcdef0000");
}

#[test]
fn test_render_hex_default_config() {
    let config = HashConfig::default();
    assert_eq!(config.hex_padding, HexPadding::None);
    assert_eq!(render_hex(&[0xff], &config), "ff");

    let padded = HashConfig {
        hex_padding: HexPadding::ZeroPad,
        ..HashConfig::default()
    };
    assert_eq!(render_hex(&[0xff], &padded).len(), 64);
}

fn hex_of(bytes: &[u8]) -> String {
    bytes_to_hex(bytes, bytes.len())
}
