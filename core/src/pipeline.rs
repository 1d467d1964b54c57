//! Pipeline orchestration (no stage logic of its own).
//!
//! Decode states: Fetched -> Decoded(base64) -> Decrypted ->
//! Decompressed(optional) -> Extracted -> Done, or Failed(error) from any
//! state. No stage is retried, no alternate scheme is attempted, and nothing
//! is partially emitted: a decode attempt is atomic.
//!
//! Each stage exclusively owns its buffer and moves the result onward; a
//! decode call has no process-wide state, so concurrent attempts (e.g. a
//! user double-submit) are independent by construction.

use log::debug;

use crate::codec;
use crate::compression;
use crate::crypto::cipher;
use crate::envelope;
use crate::types::{CompressionScheme, DecodeError, EncryptionScheme, ExtractedFile};

/// Per-attempt decode configuration, supplied by the fetch collaborator.
#[derive(Clone, Debug)]
pub struct DecodeParams {
    pub encryption: EncryptionScheme,
    pub compression: CompressionScheme,
    /// Fallback filename stem when the plaintext carries no header.
    pub hostname: String,
    /// Mandatory for [`EncryptionScheme::Aes256CbcUserSalt`], ignored otherwise.
    pub user_salt: Option<Vec<u8>>,
}

impl DecodeParams {
    pub fn new(
        encryption: EncryptionScheme,
        compression: CompressionScheme,
        hostname: impl Into<String>,
    ) -> Self {
        Self {
            encryption,
            compression,
            hostname: hostname.into(),
            user_salt: None,
        }
    }

    pub fn with_user_salt(mut self, salt: impl Into<Vec<u8>>) -> Self {
        self.user_salt = Some(salt.into());
        self
    }
}

/// Run the full decode pipeline over one Base64 blob.
///
/// Fail-fast: the first stage error terminates the attempt and surfaces
/// unchanged. Empty final content is rejected with
/// [`DecodeError::EmptyResult`] — a structurally "successful" wrong-key
/// decode must never look like a success.
pub fn decode_config(
    blob_b64: &str,
    passphrase: &str,
    params: &DecodeParams,
) -> Result<ExtractedFile, DecodeError> {
    let blob = codec::base64_decode(blob_b64)?;
    debug!("decoded {} base64 bytes", blob.len());

    let plaintext = cipher::decrypt(
        params.encryption,
        &blob,
        passphrase,
        params.user_salt.as_deref(),
    )?;
    debug!("decrypted ({}) to {} bytes", params.encryption.as_str(), plaintext.len());

    let plaintext = match params.compression {
        CompressionScheme::Gzip => {
            let inflated = compression::decompress_gzip(&plaintext)?;
            debug!("inflated to {} bytes", inflated.len());
            inflated
        }
        CompressionScheme::None => plaintext,
    };

    let file = envelope::extract_file(plaintext, &params.hostname)?;

    if file.content.is_empty() {
        return Err(DecodeError::EmptyResult);
    }

    debug!("extracted {:?} ({} bytes)", file.filename, file.content.len());
    Ok(file)
}

/// Producer-side configuration, mirroring [`DecodeParams`].
#[derive(Clone, Debug)]
pub struct EncodeParams {
    pub encryption: EncryptionScheme,
    pub compression: CompressionScheme,
    /// Mandatory for [`EncryptionScheme::Aes256CbcUserSalt`], ignored otherwise.
    pub user_salt: Option<Vec<u8>>,
}

impl EncodeParams {
    pub fn new(encryption: EncryptionScheme, compression: CompressionScheme) -> Self {
        Self {
            encryption,
            compression,
            user_salt: None,
        }
    }

    pub fn with_user_salt(mut self, salt: impl Into<Vec<u8>>) -> Self {
        self.user_salt = Some(salt.into());
        self
    }
}

/// Produce a wire blob: header prepend -> optional gzip -> encrypt -> Base64.
///
/// The exact inverse of [`decode_config`]; the emitted AES layout is
/// bit-compatible with blobs already in the field.
pub fn encode_config(
    filename: &str,
    content: &[u8],
    passphrase: &str,
    params: &EncodeParams,
) -> Result<String, DecodeError> {
    let data = envelope::prepend_filename_header(filename, content);

    let data = match params.compression {
        CompressionScheme::Gzip => compression::compress_gzip(&data)?,
        CompressionScheme::None => data,
    };

    let data = cipher::encrypt(
        params.encryption,
        &data,
        passphrase,
        params.user_salt.as_deref(),
    )?;

    Ok(codec::base64_encode(&data))
}
