//! Single-byte text decoding for length-prefixed strings.
//!
//! Both encodings map one byte to exactly one `char`, so a string's character
//! count always equals its length prefix.

use serde::{Deserialize, Serialize};

/// Replacement for bytes outside the ASCII range.
const REPLACEMENT: char = char::REPLACEMENT_CHARACTER;

/// Supported single-byte text encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextEncoding {
    /// US-ASCII; bytes above 0x7F decode to U+FFFD
    #[default]
    Ascii,
    /// ISO-8859-1; every byte maps to the code point of the same value
    Latin1,
}

impl TextEncoding {
    /// Decode `bytes` into a string, one character per byte.
    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            TextEncoding::Ascii => bytes
                .iter()
                .map(|&b| if b.is_ascii() { char::from(b) } else { REPLACEMENT })
                .collect(),
            TextEncoding::Latin1 => bytes.iter().map(|&b| char::from(b)).collect(),
        }
    }

    /// Get human-readable name
    pub fn name(self) -> &'static str {
        match self {
            TextEncoding::Ascii => "US-ASCII",
            TextEncoding::Latin1 => "ISO-8859-1",
        }
    }

    /// Parse the configuration spelling (`ascii` / `latin1`), case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "ascii" | "us-ascii" => Some(TextEncoding::Ascii),
            "latin1" | "iso-8859-1" => Some(TextEncoding::Latin1),
            _ => None,
        }
    }
}
