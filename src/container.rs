//! # Container
//!
//! The parsed form of an `_HPPW12_` file:
//!
//! | Offset | Size | Field          |
//! |--------|------|----------------|
//! | 0      | 8    | magic          |
//! | 8      | 2    | payload length (u16, little-endian) |
//! | 10     | n    | payload (AES-256-CBC ciphertext) |

use crate::consts::{HEADER_LEN, MAX_PAYLOAD_LEN};
use crate::decryptor::read::{read_magic, read_payload, read_payload_length, validate_payload_length};
use crate::error::ParseError;
use log::debug;

/// A validated container owning its ciphertext payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    payload: Vec<u8>,
}

impl Container {
    /// Parse `bytes` with the vendor's 1 KiB payload ceiling.
    ///
    /// # Errors
    ///
    /// Checks run in this order, and the first failure is returned:
    /// magic present, magic matches, length present, length non-zero,
    /// length within the ceiling, payload present.
    pub fn parse(bytes: &[u8]) -> Result<Self, ParseError> {
        Self::parse_with_ceiling(bytes, Some(MAX_PAYLOAD_LEN))
    }

    /// Parse `bytes` with a custom ceiling; `None` accepts any u16 length.
    pub fn parse_with_ceiling(bytes: &[u8], ceiling: Option<u16>) -> Result<Self, ParseError> {
        read_magic(bytes)?;
        let declared = read_payload_length(bytes)?;
        let length = validate_payload_length(declared, ceiling)?;
        let payload = read_payload(bytes, length)?;

        let ignored = bytes.len() - HEADER_LEN - length;
        if ignored > 0 {
            debug!("ignoring {ignored} trailing bytes after payload");
        }
        debug!("parsed container with {length}-byte payload");

        Ok(Self {
            payload: payload.to_vec(),
        })
    }

    /// The ciphertext.
    #[must_use]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Value of the length field.
    #[must_use]
    pub fn payload_length(&self) -> usize {
        self.payload.len()
    }

    /// Bytes of the source consumed by this container (header + payload).
    #[must_use]
    pub fn consumed_len(&self) -> usize {
        HEADER_LEN + self.payload.len()
    }
}

/// Parse a container with the default ceiling. See [`Container::parse`].
pub fn parse(bytes: &[u8]) -> Result<Container, ParseError> {
    Container::parse(bytes)
}
