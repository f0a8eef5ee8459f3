//! Manuscript re-encoding
//!
//! Chapter bodies are exported from a word processor as Windows-1252 HTML.
//! These helpers turn them into UTF-8 and fix up the declared charset so the
//! reader can load them as chapter content.

use crate::error::{ParseError, Result};
use encoding_rs::WINDOWS_1252;
use std::fs;
use std::path::Path;

/// Bytes with no assigned character in Windows-1252
const UNDEFINED_BYTES: [u8; 5] = [0x81, 0x8D, 0x8F, 0x90, 0x9D];

/// Charset declarations rewritten to `charset=utf-8`
const LEGACY_CHARSETS: [&str; 3] = [
    "charset=windows-1252",
    "charset=Windows-1252",
    "charset=unicode",
];

/// Decode Windows-1252 bytes, rejecting the five unassigned code points
pub fn decode_windows_1252(bytes: &[u8]) -> std::result::Result<String, ParseError> {
    if let Some(offset) = bytes.iter().position(|b| UNDEFINED_BYTES.contains(b)) {
        return Err(ParseError::UndefinedByte {
            byte: bytes[offset],
            offset,
        });
    }

    let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
    Ok(text.into_owned())
}

/// Point legacy charset declarations at UTF-8
pub fn normalize_charset(html: &str) -> String {
    LEGACY_CHARSETS
        .iter()
        .fold(html.to_string(), |text, charset| {
            text.replace(charset, "charset=utf-8")
        })
}

/// Re-encode one manuscript file in place as UTF-8
///
/// The file is left untouched when it cannot be decoded.
pub fn convert_file(path: &Path) -> Result<()> {
    let bytes = fs::read(path)?;
    let text = normalize_charset(&decode_windows_1252(&bytes)?);
    fs::write(path, text)?;
    Ok(())
}
