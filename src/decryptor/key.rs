//! src/decryptor/key.rs
//! Embedded key and the call-scoped key session
//!
//! The vendor tool imports its key into a named Windows key container and has
//! to delete that container afterwards. Here the key only ever lives in memory:
//! a `KeySession` owns the expanded AES-256 key schedule, and dropping it wipes
//! the schedule (aes `zeroize` feature). Nothing outlives the call that made it.

use crate::aliases::Aes256Key32;
use crate::consts::FIXED_KEY_BYTES;
use crate::error::CryptoError;
use aes::cipher::{BlockDecrypt, KeyInit};
use aes::{Aes256Dec, Block as AesBlock};
use log::trace;

/// The vendor utility's AES-256 key, in a zeroize-on-drop buffer.
#[must_use]
pub fn fixed_key() -> Aes256Key32 {
    Aes256Key32::new(FIXED_KEY_BYTES)
}

/// An imported AES-256 decryption key.
pub struct KeySession {
    cipher: Aes256Dec,
}

impl KeySession {
    /// Expand `key` into a decryption key schedule.
    #[inline(always)]
    pub fn import(key: &Aes256Key32) -> Self {
        trace!("key session opened");
        Self {
            cipher: Aes256Dec::new(key.expose_secret().into()),
        }
    }

    /// Like [`KeySession::import`], for raw key bytes of unchecked length.
    pub fn import_slice(key: &[u8]) -> Result<Self, CryptoError> {
        let cipher = Aes256Dec::new_from_slice(key)
            .map_err(|_| CryptoError::KeyImportFailed { len: key.len() })?;
        trace!("key session opened");
        Ok(Self { cipher })
    }

    /// Decrypt one block in place (raw AES, no chaining).
    #[inline(always)]
    pub fn decrypt_block(&self, block: &mut AesBlock) {
        self.cipher.decrypt_block(block);
    }
}

impl Drop for KeySession {
    fn drop(&mut self) {
        trace!("key session released");
    }
}
