//! Core data types and the unified pipeline error.
//!
//! Design notes:
//! - Scheme enums are parsed from the descriptor strings the device publishes
//!   out-of-band; unknown descriptors are rejected, never guessed.
//! - One error enum covers every stage so `?` flows through the pipeline.
//! - No passphrase or derived-key material ever appears in an error message.

use std::str::FromStr;

use thiserror::Error;

use crate::constants::{scheme_names, MIN_AES_ENVELOPE_LEN};

/// Encryption scheme applied to the blob after compression.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EncryptionScheme {
    /// Identity; the decoded bytes are already plaintext.
    None,
    /// Repeating-key XOR with the UTF-8 passphrase bytes.
    /// Not authenticated; a wrong key only surfaces downstream.
    Xor,
    /// AES-256-CBC, key derived from the passphrase and the salt embedded
    /// in the blob (salt[16] ++ iv[16] ++ ciphertext).
    Aes256Cbc,
    /// AES-256-CBC with the same blob layout, but the embedded salt bytes
    /// are ignored and the key is derived from a caller-supplied salt.
    Aes256CbcUserSalt,
}

impl EncryptionScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            EncryptionScheme::None => scheme_names::NONE,
            EncryptionScheme::Xor => scheme_names::XOR,
            EncryptionScheme::Aes256Cbc => scheme_names::AES256,
            EncryptionScheme::Aes256CbcUserSalt => scheme_names::AES256_USER_SALT,
        }
    }
}

impl FromStr for EncryptionScheme {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            x if x == scheme_names::NONE => Ok(EncryptionScheme::None),
            x if x == scheme_names::XOR => Ok(EncryptionScheme::Xor),
            x if x == scheme_names::AES256 => Ok(EncryptionScheme::Aes256Cbc),
            x if x == scheme_names::AES256_USER_SALT => Ok(EncryptionScheme::Aes256CbcUserSalt),
            other => Err(DecodeError::UnknownEncryption { raw: other.to_string() }),
        }
    }
}

/// Compression scheme applied before encryption on the producing side,
/// so decompression runs after decryption here.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CompressionScheme {
    None,
    Gzip,
}

impl CompressionScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompressionScheme::None => scheme_names::NONE,
            CompressionScheme::Gzip => scheme_names::GZIP,
        }
    }
}

impl FromStr for CompressionScheme {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            x if x == scheme_names::NONE => Ok(CompressionScheme::None),
            x if x == scheme_names::GZIP => Ok(CompressionScheme::Gzip),
            other => Err(DecodeError::UnknownCompression { raw: other.to_string() }),
        }
    }
}

/// Final pipeline output: a recovered file ready to hand to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractedFile {
    /// Embedded filename, or `<hostname>.yaml` when no header was present.
    pub filename: String,
    /// Raw file bytes, exclusive of the filename header line.
    pub content: Vec<u8>,
}

/// Unified error for every decode/encode stage.
///
/// Each variant maps to exactly one failure point; the orchestrator never
/// retries and never rewrites an error from a lower stage.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Malformed Base64 at the wire boundary (bad alphabet or a length that
    /// can never be valid, e.g. len mod 4 == 1).
    #[error("invalid base64 encoding: {0}")]
    InvalidEncoding(String),

    /// AES blob too short to contain salt and IV.
    #[error("malformed AES envelope: {have} bytes, need at least {need}")]
    MalformedEnvelope { have: usize, need: usize },

    /// Key material unusable for the selected scheme (empty XOR passphrase,
    /// missing user salt).
    #[error("invalid key: {0}")]
    InvalidKey(&'static str),

    /// PBKDF2 library failure. Does not indicate a wrong passphrase.
    #[error("key derivation failed: {0}")]
    KeyDerivation(String),

    /// PKCS#7 padding check failed after CBC decryption, the conventional
    /// signal of a wrong passphrase.
    #[error("decryption failed: invalid padding (wrong passphrase?)")]
    DecryptionFailure,

    /// Invalid or truncated gzip stream.
    #[error("decompression failed: {0}")]
    DecompressionFailure(String),

    /// Decoded bytes were not valid UTF-8 where text was required.
    #[error("decoded data is not valid UTF-8 text")]
    InvalidText,

    /// Decode "succeeded" but produced no content; never a legitimate result.
    #[error("decoded content is empty")]
    EmptyResult,

    /// Unrecognized encryption descriptor from the out-of-band channel.
    #[error("unknown encryption scheme: {raw:?}")]
    UnknownEncryption { raw: String },

    /// Unrecognized compression descriptor from the out-of-band channel.
    #[error("unknown compression scheme: {raw:?}")]
    UnknownCompression { raw: String },
}

impl DecodeError {
    /// Stable kind name for programmatic branching at the caller boundary.
    pub fn kind(&self) -> &'static str {
        match self {
            DecodeError::InvalidEncoding(_) => "invalid-encoding",
            DecodeError::MalformedEnvelope { .. } => "malformed-envelope",
            DecodeError::InvalidKey(_) => "invalid-key",
            DecodeError::KeyDerivation(_) => "key-derivation-failure",
            DecodeError::DecryptionFailure => "decryption-failure",
            DecodeError::DecompressionFailure(_) => "decompression-failure",
            DecodeError::InvalidText => "invalid-text",
            DecodeError::EmptyResult => "empty-result",
            DecodeError::UnknownEncryption { .. } => "unknown-encryption",
            DecodeError::UnknownCompression { .. } => "unknown-compression",
        }
    }

    /// Helper for the standard envelope minimum-length check.
    pub(crate) fn envelope_too_short(have: usize) -> Self {
        DecodeError::MalformedEnvelope { have, need: MIN_AES_ENVELOPE_LEN }
    }
}
