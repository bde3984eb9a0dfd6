// SPDX-License-Identifier: MIT

//! gzip + Base64 text packing
//!
//! `compress` gzips UTF-8 text and encodes it with the standard Base64
//! alphabet; `decompress` reverses it. Empty input maps to empty output.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use flate2::{read::GzDecoder, write::GzEncoder, Compression};
use std::io::{Read, Write};
use thiserror::Error;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Reasons a payload could not be packed or unpacked
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Payload is not valid Base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("Payload is not GZIP data")]
    NotGzip,

    #[error("Decompressed payload is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("GZIP stream error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn compress(text: &str) -> Result<String, CodecError> {
    if text.is_empty() {
        return Ok(String::new());
    }
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(text.as_bytes())?;
    let bytes = encoder.finish()?;
    Ok(STANDARD.encode(bytes))
}

pub fn decompress(encoded: &str) -> Result<String, CodecError> {
    let encoded = encoded.trim();
    if encoded.is_empty() {
        return Ok(String::new());
    }
    let bytes = STANDARD.decode(encoded)?;
    if !bytes.starts_with(&GZIP_MAGIC) {
        return Err(CodecError::NotGzip);
    }

    let mut decoder = GzDecoder::new(bytes.as_slice());
    let mut out = Vec::new();
    decoder.read_to_end(&mut out)?;
    Ok(String::from_utf8(out)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let text = "{\"stepRef\":\"review\",\"note\":\"Überprüfung – ok ✓\"}".repeat(20);
        let packed = compress(&text).unwrap();
        assert_ne!(packed, text);
        assert_eq!(decompress(&packed).unwrap(), text);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(compress("").unwrap(), "");
        assert_eq!(decompress("  ").unwrap(), "");
    }

    #[test]
    fn test_invalid_base64() {
        assert!(matches!(
            decompress("not*base64!"),
            Err(CodecError::InvalidBase64(_))
        ));
    }

    #[test]
    fn test_not_gzip() {
        let plain = STANDARD.encode("hello");
        assert!(matches!(decompress(&plain), Err(CodecError::NotGzip)));
    }

    #[test]
    fn test_corrupt_trailer() {
        let packed = compress("some text with a damaged size trailer").unwrap();
        let mut bytes = STANDARD.decode(packed).unwrap();
        let last = bytes.len() - 1;
        bytes[last] ^= 0xff;
        let broken = STANDARD.encode(bytes);
        assert!(matches!(decompress(&broken), Err(CodecError::Io(_))));
    }
}
