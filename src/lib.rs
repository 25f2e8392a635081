// src/lib.rs

//! Decrypts `_HPPW12_` password files written by the HP password encryption
//! utility: a magic-tagged container holding a UTF-16LE password encrypted with
//! AES-256-CBC under a fixed key.
//!
//! ```no_run
//! let password = hppw_decrypt::decode_file("password.bin")?;
//! println!("{password}");
//! # Ok::<(), hppw_decrypt::DecodeError>(())
//! ```

pub mod aliases;
pub mod builders;
pub mod consts;
pub mod container;
pub mod decryptor;
pub mod error;
pub mod header;
pub mod utils;

// High-level API
pub use builders::{DecodeOptions, TextMode};
pub use container::{parse, Container};
pub use decryptor::{decode_bytes, decode_bytes_with, decode_file, decode_file_with};
pub use error::{CryptoError, DecodeError, ParseError};

// Cipher engine, for callers that parse on their own
pub use decryptor::{decrypt_payload, fixed_key, KeySession};

pub use header::read_header;
