//! crypto/cipher.rs
//! Scheme-selected decryption (and its encode-side inverse).
//!
//! Design notes:
//! - Dispatch is driven by [`EncryptionScheme`]; unknown schemes are rejected
//!   at descriptor parse time, so every branch here is total.
//! - The AES envelope is sliced at flat byte offsets 0..16 / 16..32 / 32..,
//!   never reinterpreted as machine-native word arrays. The producer writes
//!   `salt ++ iv ++ ciphertext` as plain bytes.
//! - XOR is a deliberately weak legacy scheme with no authentication: any
//!   passphrase "succeeds" structurally and wrongness only surfaces
//!   downstream (failed UTF-8 decode or failed gzip inflate).
//! - PKCS#7 unpadding failure is the conventional wrong-passphrase signal
//!   for CBC, which cannot otherwise detect a key mismatch.

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use aes::Aes256;
use rand::RngCore;

use crate::constants::{IV_LEN, MIN_AES_ENVELOPE_LEN, SALT_LEN};
use crate::crypto::kdf::derive_key_256;
use crate::types::{DecodeError, EncryptionScheme};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Structural view over a decoded AES blob: `salt[16] ++ iv[16] ++ ciphertext`.
///
/// Borrowed slices only; nothing is copied until decryption produces the
/// plaintext buffer.
#[derive(Debug)]
pub struct AesEnvelope<'a> {
    pub salt: &'a [u8],
    pub iv: &'a [u8],
    pub ciphertext: &'a [u8],
}

impl<'a> AesEnvelope<'a> {
    /// Slice an AES envelope out of a decoded blob.
    ///
    /// Blobs shorter than salt + IV are rejected with
    /// [`DecodeError::MalformedEnvelope`] before any cryptographic work.
    pub fn parse(blob: &'a [u8]) -> Result<Self, DecodeError> {
        if blob.len() < MIN_AES_ENVELOPE_LEN {
            return Err(DecodeError::envelope_too_short(blob.len()));
        }
        Ok(Self {
            salt: &blob[..SALT_LEN],
            iv: &blob[SALT_LEN..MIN_AES_ENVELOPE_LEN],
            ciphertext: &blob[MIN_AES_ENVELOPE_LEN..],
        })
    }
}

/// Repeating-key XOR. Involution: applying it twice with the same key
/// returns the input. Caller guarantees a non-empty key.
pub fn xor_bytes(data: &[u8], key: &[u8]) -> Vec<u8> {
    debug_assert!(!key.is_empty(), "xor key must be non-empty");
    data.iter()
        .enumerate()
        .map(|(i, b)| b ^ key[i % key.len()])
        .collect()
}

/// Decrypt a decoded blob according to `scheme`.
///
/// `user_salt` is consulted only by [`EncryptionScheme::Aes256CbcUserSalt`];
/// for that scheme it is mandatory and the salt bytes embedded in the blob
/// are ignored.
pub fn decrypt(
    scheme: EncryptionScheme,
    blob: &[u8],
    passphrase: &str,
    user_salt: Option<&[u8]>,
) -> Result<Vec<u8>, DecodeError> {
    match scheme {
        EncryptionScheme::None => Ok(blob.to_vec()),

        EncryptionScheme::Xor => {
            let key = passphrase.as_bytes();
            if key.is_empty() {
                return Err(DecodeError::InvalidKey("XOR requires a non-empty passphrase"));
            }
            Ok(xor_bytes(blob, key))
        }

        EncryptionScheme::Aes256Cbc => {
            let envelope = AesEnvelope::parse(blob)?;
            decrypt_aes256_cbc(&envelope, passphrase, envelope.salt)
        }

        EncryptionScheme::Aes256CbcUserSalt => {
            let envelope = AesEnvelope::parse(blob)?;
            let salt = user_salt
                .ok_or(DecodeError::InvalidKey("user-salt scheme requires a salt"))?;
            decrypt_aes256_cbc(&envelope, passphrase, salt)
        }
    }
}

fn decrypt_aes256_cbc(
    envelope: &AesEnvelope<'_>,
    passphrase: &str,
    salt: &[u8],
) -> Result<Vec<u8>, DecodeError> {
    let key = derive_key_256(passphrase.as_bytes(), salt)?;

    let cipher = Aes256CbcDec::new_from_slices(&key, envelope.iv)
        .map_err(|e| DecodeError::KeyDerivation(e.to_string()))?;

    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(envelope.ciphertext)
        .map_err(|_| DecodeError::DecryptionFailure)
}

/// Encrypt plaintext into the bit-exact wire layout the decode path expects.
///
/// This is the producing side of the protocol (the device build step); it is
/// exercised by round-trip tests and by callers that regenerate blobs.
pub fn encrypt(
    scheme: EncryptionScheme,
    plaintext: &[u8],
    passphrase: &str,
    user_salt: Option<&[u8]>,
) -> Result<Vec<u8>, DecodeError> {
    match scheme {
        EncryptionScheme::None => Ok(plaintext.to_vec()),

        EncryptionScheme::Xor => {
            let key = passphrase.as_bytes();
            if key.is_empty() {
                return Err(DecodeError::InvalidKey("XOR requires a non-empty passphrase"));
            }
            Ok(xor_bytes(plaintext, key))
        }

        EncryptionScheme::Aes256Cbc => {
            let mut salt = [0u8; SALT_LEN];
            rand::thread_rng().fill_bytes(&mut salt);
            encrypt_aes256_cbc(plaintext, passphrase, &salt, &salt)
        }

        EncryptionScheme::Aes256CbcUserSalt => {
            let key_salt = user_salt
                .ok_or(DecodeError::InvalidKey("user-salt scheme requires a salt"))?;
            // The embedded salt slot is still written, but carries random
            // filler the decoder ignores.
            let mut filler = [0u8; SALT_LEN];
            rand::thread_rng().fill_bytes(&mut filler);
            encrypt_aes256_cbc(plaintext, passphrase, key_salt, &filler)
        }
    }
}

fn encrypt_aes256_cbc(
    plaintext: &[u8],
    passphrase: &str,
    key_salt: &[u8],
    embedded_salt: &[u8; SALT_LEN],
) -> Result<Vec<u8>, DecodeError> {
    let key = derive_key_256(passphrase.as_bytes(), key_salt)?;

    let mut iv = [0u8; IV_LEN];
    rand::thread_rng().fill_bytes(&mut iv);

    let cipher = Aes256CbcEnc::new_from_slices(&key, &iv)
        .map_err(|e| DecodeError::KeyDerivation(e.to_string()))?;
    let ciphertext = cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    let mut out = Vec::with_capacity(MIN_AES_ENVELOPE_LEN + ciphertext.len());
    out.extend_from_slice(embedded_salt);
    out.extend_from_slice(&iv);
    out.extend_from_slice(&ciphertext);
    Ok(out)
}
