//! src/decryptor/read.rs
//! Container field readers over an in-memory byte slice

use crate::consts::{HEADER_LEN, HPPW_MAGIC, LENGTH_FIELD_LEN, MAGIC_LEN};
use crate::error::ParseError;

/// Validate the 8-byte `_HPPW12_` magic at the start of `bytes`.
///
/// Reports the first mismatching index, like the vendor tool's byte-by-byte check.
#[inline(always)]
pub fn read_magic(bytes: &[u8]) -> Result<(), ParseError> {
    let magic = bytes
        .get(..MAGIC_LEN)
        .ok_or(ParseError::TruncatedMagic {
            available: bytes.len(),
        })?;

    match magic
        .iter()
        .zip(HPPW_MAGIC.iter())
        .position(|(actual, expected)| actual != expected)
    {
        Some(index) => Err(ParseError::BadMagic {
            index,
            expected: HPPW_MAGIC[index],
            actual: magic[index],
        }),
        None => Ok(()),
    }
}

/// Read the little-endian u16 payload length that follows the magic.
#[inline(always)]
pub fn read_payload_length(bytes: &[u8]) -> Result<u16, ParseError> {
    let field = bytes
        .get(MAGIC_LEN..HEADER_LEN)
        .ok_or(ParseError::TruncatedLength {
            available: bytes.len().saturating_sub(MAGIC_LEN),
        })?;

    let mut len_bytes = [0u8; LENGTH_FIELD_LEN];
    len_bytes.copy_from_slice(field);
    Ok(u16::from_le_bytes(len_bytes))
}

/// Reject a zero length, then a length above `ceiling` (if any).
#[inline(always)]
pub fn validate_payload_length(length: u16, ceiling: Option<u16>) -> Result<usize, ParseError> {
    if length == 0 {
        return Err(ParseError::InvalidLength);
    }
    if let Some(max) = ceiling {
        if length > max {
            return Err(ParseError::LengthExceedsBuffer { length, max });
        }
    }
    Ok(length as usize)
}

/// Borrow exactly `length` payload bytes following the header.
///
/// Anything past `HEADER_LEN + length` is ignored.
#[inline(always)]
pub fn read_payload(bytes: &[u8], length: usize) -> Result<&[u8], ParseError> {
    let remaining = &bytes[HEADER_LEN.min(bytes.len())..];
    remaining
        .get(..length)
        .ok_or(ParseError::TruncatedPayload {
            expected: length,
            available: remaining.len(),
        })
}
