/// PBKDF2-HMAC-SHA256 iteration count, fixed by the wire producer.
/// Changing this breaks decryption of every blob already in the field.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Stable key and envelope sizes.
pub const KEY_LEN_32: usize = 32;

/// Salt length embedded at the front of an AES blob.
pub const SALT_LEN: usize = 16;

/// CBC initialization vector length, one AES block.
pub const IV_LEN: usize = 16;

/// Minimum decoded AES blob length: salt + IV, with possibly empty ciphertext.
/// Shorter blobs are rejected before any key derivation runs.
pub const MIN_AES_ENVELOPE_LEN: usize = SALT_LEN + IV_LEN;

/// Literal prefix of the optional first-line filename header.
pub const FILENAME_PREFIX: &str = "# filename:";

/// Extension appended to the hostname when no filename header is present.
pub const DEFAULT_FILE_EXT: &str = ".yaml";

/// Scheme descriptor strings as published out-of-band by the device
/// (e.g. `X-Encryption-Type` / `X-Compression-Type` response headers).
pub mod scheme_names {
    pub const NONE: &str = "none";
    pub const XOR: &str = "xor";
    pub const AES256: &str = "aes256";
    pub const AES256_USER_SALT: &str = "aes256-user-salt";
    pub const GZIP: &str = "gzip";
}
