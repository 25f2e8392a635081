//! src/builders/decode_options.rs
//! Decode options builder: text handling and the payload ceiling

use crate::consts::MAX_PAYLOAD_LEN;
use crate::error::DecodeError;
use crate::utils::{utf16le_to_string, utf16le_to_string_lossy};

/// How decrypted bytes become a `String`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextMode {
    /// Odd byte counts and unpaired surrogates are errors.
    #[default]
    Strict,
    /// Malformed code units become U+FFFD, like the vendor tool's output.
    Lossy,
}

impl TextMode {
    /// Decode UTF-16LE bytes according to this mode.
    pub fn decode(self, plaintext: &[u8]) -> Result<String, DecodeError> {
        match self {
            TextMode::Strict => utf16le_to_string(plaintext),
            TextMode::Lossy => Ok(utf16le_to_string_lossy(plaintext)),
        }
    }
}

/// Options for the decode flow.
///
/// Defaults match the vendor tool: payloads above [`MAX_PAYLOAD_LEN`] are
/// rejected and text is decoded strictly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOptions {
    text_mode: TextMode,
    payload_ceiling: Option<u16>,
}

impl DecodeOptions {
    /// Create options with the vendor-compatible defaults
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text_mode: TextMode::Strict,
            payload_ceiling: Some(MAX_PAYLOAD_LEN),
        }
    }

    /// Set the text decoding mode
    #[must_use]
    pub const fn with_text_mode(mut self, text_mode: TextMode) -> Self {
        self.text_mode = text_mode;
        self
    }

    /// Keep (`true`) or lift (`false`) the 1 KiB payload ceiling.
    ///
    /// Lifting it still leaves the u16 length field as the natural bound.
    #[must_use]
    pub const fn with_buffer_ceiling(mut self, enforce: bool) -> Self {
        self.payload_ceiling = if enforce { Some(MAX_PAYLOAD_LEN) } else { None };
        self
    }

    #[must_use]
    pub const fn text_mode(&self) -> TextMode {
        self.text_mode
    }

    #[must_use]
    pub const fn payload_ceiling(&self) -> Option<u16> {
        self.payload_ceiling
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self::new()
    }
}
