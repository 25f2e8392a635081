// src/decryptor/mod.rs

//! Decryption facade.
//!
//! Core API: `decode_file(path)?` for the whole flow.
//! Helpers: `decrypt_payload`, `KeySession` and the field readers for custom flows.

pub(crate) mod cbc;
pub(crate) mod decrypt;
pub(crate) mod key;
pub(crate) mod padding;
pub(crate) mod read;

pub use cbc::decrypt_payload;
pub use decrypt::{decode_bytes, decode_bytes_with, decode_file, decode_file_with};
pub use key::{fixed_key, KeySession};
pub use padding::pkcs7_unpadded_len;
pub use read::{read_magic, read_payload, read_payload_length, validate_payload_length};
