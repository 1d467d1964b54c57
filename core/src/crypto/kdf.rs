//! crypto/kdf.rs
//! PBKDF2-based key derivation from passphrase and salt.
//!
//! Design:
//! - PBKDF2-HMAC-SHA256, 100_000 iterations, 32-byte output.
//! - Deterministic: the same (passphrase, salt) always yields the same key.
//!   The decode path relies on this for correctness; nothing is cached.
//! - The derived key lives only for the duration of one decrypt call.

use hmac::Hmac;
use pbkdf2::pbkdf2;
use sha2::Sha256;

use crate::constants::{KEY_LEN_32, PBKDF2_ITERATIONS};
use crate::types::DecodeError;

/// Derive a 256-bit symmetric key from `(passphrase, salt)`.
///
/// The iteration count is fixed to match the wire producer; see
/// [`PBKDF2_ITERATIONS`]. The only error path is a library failure,
/// surfaced as [`DecodeError::KeyDerivation`].
#[inline]
pub fn derive_key_256(passphrase: &[u8], salt: &[u8]) -> Result<[u8; KEY_LEN_32], DecodeError> {
    let mut key = [0u8; KEY_LEN_32];
    pbkdf2::<Hmac<Sha256>>(passphrase, salt, PBKDF2_ITERATIONS, &mut key)
        .map_err(|e| DecodeError::KeyDerivation(e.to_string()))?;
    Ok(key)
}
