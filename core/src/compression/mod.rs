//! compression/mod.rs
//! Optional gzip stage via flate2.
//!
//! Design notes:
//! - Compression happens before encryption on the producing side, so the
//!   inflate stage always runs after decryption here.
//! - Plain gzip framing, exactly what the producer's `gzip` emits: no extra
//!   length prefix or checksum trailer of our own.

use std::io::{Read, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::types::DecodeError;

/// Inflate a gzip stream.
///
/// Fails with [`DecodeError::DecompressionFailure`] on an invalid header or
/// a truncated stream — with an encrypted upstream this is usually a wrong
/// passphrase rather than real corruption.
pub fn decompress_gzip(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut decoder = GzDecoder::new(input);
    let mut out = Vec::new();
    decoder
        .read_to_end(&mut out)
        .map_err(|e| DecodeError::DecompressionFailure(e.to_string()))?;
    Ok(out)
}

/// Deflate to a gzip stream with the default level, the encode-side inverse.
pub fn compress_gzip(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(input)
        .map_err(|e| DecodeError::DecompressionFailure(e.to_string()))?;
    encoder
        .finish()
        .map_err(|e| DecodeError::DecompressionFailure(e.to_string()))
}
