//! # Error Types
//!
//! This module defines the error types used throughout the library.
//! Parsing and cryptographic failures have their own enums so callers that only
//! touch one stage can match on it directly; [`DecodeError`] wraps both for the
//! full file-to-string flow.

use std::path::PathBuf;
use thiserror::Error;

/// Container layout violations, reported in the order the checks run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Fewer than 8 bytes were available for the magic value.
    #[error("unable to read the file magic value (only read {available} bytes, expecting 8)")]
    TruncatedMagic { available: usize },

    /// The magic value differs from `_HPPW12_`. `index` is the first differing byte.
    #[error("invalid file header (expecting 0x{expected:02X}, read 0x{actual:02X} at index {index})")]
    BadMagic {
        index: usize,
        expected: u8,
        actual: u8,
    },

    /// The 16-bit length field is missing or cut short.
    #[error("unable to read the payload length (only {available} bytes after the magic, expecting 2)")]
    TruncatedLength { available: usize },

    /// The length field is zero.
    #[error("length of encrypted data cannot be zero")]
    InvalidLength,

    /// The length field exceeds the working buffer ceiling.
    #[error("invalid length of encrypted data (expecting at most {max} bytes, got {length})")]
    LengthExceedsBuffer { length: u16, max: u16 },

    /// Fewer payload bytes follow the header than the length field declares.
    #[error("unable to read the encrypted data (only {available} bytes available, expecting {expected})")]
    TruncatedPayload { expected: usize, available: usize },
}

/// Failures inside the cipher engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Key bytes could not be turned into an AES-256 key schedule.
    #[error("failed to import the key (expecting 32 bytes, got {len})")]
    KeyImportFailed { len: usize },

    /// Ciphertext shape or padding was rejected.
    #[error("failed to decrypt the data: {0}")]
    DecryptionFailed(&'static str),
}

/// The error type for the full decode flow.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The input path does not exist.
    #[error("file containing the password does not exist: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O error while reading the input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Container layout error.
    #[error("container error: {0}")]
    Parse(#[from] ParseError),

    /// Decryption error.
    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),

    /// The decrypted bytes are not valid UTF-16LE text.
    #[error("text decode error: {0}")]
    TextDecode(String),
}
