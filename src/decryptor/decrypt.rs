//! src/decryptor/decrypt.rs
//! File → container → plaintext → password

use crate::builders::DecodeOptions;
use crate::container::Container;
use crate::decryptor::cbc::decrypt_payload;
use crate::decryptor::key::fixed_key;
use crate::error::DecodeError;
use log::debug;
use std::io::ErrorKind;
use std::path::Path;

/// Decrypt an `_HPPW12_` file and return the password it holds.
///
/// Uses [`DecodeOptions::default`]: 1 KiB payload ceiling, strict UTF-16LE.
///
/// # Errors
///
/// - [`DecodeError::FileNotFound`] / [`DecodeError::Io`] - the file can't be read
/// - [`DecodeError::Parse`] - the container layout is invalid
/// - [`DecodeError::Crypto`] - bad ciphertext length or padding
/// - [`DecodeError::TextDecode`] - the plaintext isn't valid UTF-16LE
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<String, DecodeError> {
    decode_file_with(path, &DecodeOptions::default())
}

/// [`decode_file`] with explicit options.
pub fn decode_file_with<P: AsRef<Path>>(
    path: P,
    options: &DecodeOptions,
) -> Result<String, DecodeError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DecodeError::FileNotFound(path.to_path_buf()),
        _ => DecodeError::Io(e),
    })?;
    debug!("read {} bytes from {}", bytes.len(), path.display());

    decode_bytes_with(&bytes, options)
}

/// Decode an in-memory container with default options.
pub fn decode_bytes(bytes: &[u8]) -> Result<String, DecodeError> {
    decode_bytes_with(bytes, &DecodeOptions::default())
}

/// Decode an in-memory container.
pub fn decode_bytes_with(bytes: &[u8], options: &DecodeOptions) -> Result<String, DecodeError> {
    let container = Container::parse_with_ceiling(bytes, options.payload_ceiling())?;

    let key = fixed_key();
    let plaintext = decrypt_payload(container.payload(), &key)?;
    drop(key);

    options.text_mode().decode(&plaintext.expose_secret()[..])
}
