//! Byte-array codec helpers: Base64 at the wire boundary, UTF-8 at the
//! final text-yielding step.
//!
//! Design notes:
//! - Standard alphabet with padding, strict mode: anything the producer's
//!   `base64.b64encode` would not emit is rejected.
//! - UTF-8 decoding is only applied to final plaintext, never to
//!   intermediate ciphertext.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::types::DecodeError;

/// Decode a Base64 wire string into raw bytes.
///
/// Fails with [`DecodeError::InvalidEncoding`] on a malformed alphabet or an
/// impossible padded length (len mod 4 == 1 is always invalid).
pub fn base64_decode(s: &str) -> Result<Vec<u8>, DecodeError> {
    STANDARD
        .decode(s)
        .map_err(|e| DecodeError::InvalidEncoding(e.to_string()))
}

/// Encode raw bytes as a padded standard-alphabet Base64 string. Total.
pub fn base64_encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode plaintext bytes as UTF-8, consuming the buffer.
pub fn utf8_decode(bytes: Vec<u8>) -> Result<String, DecodeError> {
    String::from_utf8(bytes).map_err(|_| DecodeError::InvalidText)
}
