//! # Header Check
//!
//! Reads just the 10-byte header from any reader, for tools that want to
//! classify a file without decrypting it.

use crate::consts::{HEADER_LEN, MAX_PAYLOAD_LEN};
use crate::decryptor::read::{read_magic, read_payload_length, validate_payload_length};
use crate::error::DecodeError;
use std::io::Read;

/// Read and validate the container header, returning the declared payload length.
///
/// Runs the same magic and length checks as [`Container::parse`](crate::Container::parse),
/// with the default 1 KiB ceiling, but never touches the payload.
///
/// # Errors
///
/// - [`DecodeError::Io`] - the reader failed
/// - [`DecodeError::Parse`] - the header is short, has bad magic, or an invalid length
///
/// # Example
///
/// ```
/// use hppw_decrypt::read_header;
/// use std::io::Cursor;
///
/// let header = b"_HPPW12_\x20\x00";
/// assert_eq!(read_header(Cursor::new(header))?, 32);
/// # Ok::<(), hppw_decrypt::DecodeError>(())
/// ```
pub fn read_header<R: Read>(reader: R) -> Result<u16, DecodeError> {
    let mut header = Vec::with_capacity(HEADER_LEN);
    reader.take(HEADER_LEN as u64).read_to_end(&mut header)?;

    read_magic(&header)?;
    let length = read_payload_length(&header)?;
    validate_payload_length(length, Some(MAX_PAYLOAD_LEN))?;
    Ok(length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use std::io::Cursor;

    #[test]
    fn reads_length_and_stops() {
        let mut cursor = Cursor::new(b"_HPPW12_\x10\x00ciphertext...".to_vec());
        assert_eq!(read_header(&mut cursor).unwrap(), 16);
        assert_eq!(cursor.position(), 10);
    }

    #[test]
    fn short_reader() {
        let err = read_header(Cursor::new(b"_HP")).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::Parse(ParseError::TruncatedMagic { available: 3 })
        ));
    }

    #[test]
    fn not_a_container() {
        let err = read_header(Cursor::new(b"AES\x03\x00\x00\x00\x00\x00\x00")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "container error: invalid file header (expecting 0x5F, read 0x41 at index 0)"
        );
    }

    #[test]
    fn zero_length() {
        let err = read_header(Cursor::new(b"_HPPW12_\x00\x00")).unwrap_err();
        assert!(matches!(err, DecodeError::Parse(ParseError::InvalidLength)));
    }
}
