//! Self-describing filename/content envelope.
//!
//! The producer may prepend a single comment line `# filename: <name>` to
//! the file bytes before compressing/encrypting. Header-less files are valid
//! and common; they fall back to `<hostname>.yaml`.

use crate::codec::utf8_decode;
use crate::constants::{DEFAULT_FILE_EXT, FILENAME_PREFIX};
use crate::types::{DecodeError, ExtractedFile};

/// Extract the filename header and payload from final plaintext.
///
/// The plaintext must be valid UTF-8 for header inspection; non-text bytes
/// fail with [`DecodeError::InvalidText`]. The first line is only treated as
/// a header when, trimmed, it starts with `# filename:`; otherwise the whole
/// plaintext is the content and the filename defaults to
/// `<default_hostname>.yaml`.
pub fn extract_file(plaintext: Vec<u8>, default_hostname: &str) -> Result<ExtractedFile, DecodeError> {
    let text = utf8_decode(plaintext)?;

    if let Some(newline) = text.find('\n') {
        let first_line = text[..newline].trim();
        if let Some(rest) = first_line.strip_prefix(FILENAME_PREFIX) {
            return Ok(ExtractedFile {
                filename: rest.trim().to_string(),
                content: text[newline + 1..].as_bytes().to_vec(),
            });
        }
    }

    Ok(ExtractedFile {
        filename: format!("{}{}", default_hostname, DEFAULT_FILE_EXT),
        content: text.into_bytes(),
    })
}

/// Prepend the filename header line, the encode-side inverse.
pub fn prepend_filename_header(filename: &str, content: &[u8]) -> Vec<u8> {
    let header = format!("{} {}\n", FILENAME_PREFIX, filename);
    let mut out = Vec::with_capacity(header.len() + content.len());
    out.extend_from_slice(header.as_bytes());
    out.extend_from_slice(content);
    out
}
