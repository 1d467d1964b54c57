//! backup-core
//!
//! Layered decode pipeline for device config backups:
//! Base64 -> scheme-selected decryption -> optional gzip inflate ->
//! filename/content envelope extraction.
//!
//! The encode path (the transform the device build step applies) is the
//! exact inverse and shares every stage.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;

// Pipeline stages, leaves first
pub mod codec;
pub mod compression;
pub mod crypto;
pub mod envelope;

// Stage sequencing
pub mod pipeline;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::pipeline::{decode_config, encode_config, DecodeParams, EncodeParams};
    pub use crate::types::{CompressionScheme, DecodeError, EncryptionScheme, ExtractedFile};
}

// High-level API — this is what most users import
pub use pipeline::{decode_config, encode_config, DecodeParams, EncodeParams};
pub use types::{CompressionScheme, DecodeError, EncryptionScheme, ExtractedFile};
