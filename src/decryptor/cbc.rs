//! src/decryptor/cbc.rs
//! AES-256-CBC payload decryption (zero IV, PKCS#7)

use crate::aliases::{Aes256Key32, Block16, PlainText};
use crate::consts::AES_BLOCK_SIZE;
use crate::decryptor::key::KeySession;
use crate::decryptor::padding::pkcs7_unpadded_len;
use crate::error::CryptoError;
use crate::utils::xor_blocks;
use aes::Block as AesBlock;
use log::debug;

/// Decrypt `payload` under `key` and strip its PKCS#7 padding.
///
/// The chaining value starts as sixteen zero bytes, matching the Windows
/// provider's default for an imported AES key with no IV set. The key session
/// lives only for the duration of this call.
///
/// # Errors
///
/// [`CryptoError::DecryptionFailed`] if `payload` is empty or not a whole
/// number of blocks, or if the padding is invalid (wrong key or corrupted data).
pub fn decrypt_payload(payload: &[u8], key: &Aes256Key32) -> Result<PlainText, CryptoError> {
    if payload.is_empty() || payload.len() % AES_BLOCK_SIZE != 0 {
        return Err(CryptoError::DecryptionFailed(
            "ciphertext is not a whole number of 16-byte blocks",
        ));
    }

    let session = KeySession::import(key);
    let mut plaintext = PlainText::new(Vec::with_capacity(payload.len()));
    let mut previous_block = Block16::new([0u8; 16]);
    let mut decrypted_block = Block16::new([0u8; 16]);
    let mut plaintext_block = Block16::new([0u8; 16]);

    for chunk in payload.chunks_exact(AES_BLOCK_SIZE) {
        // Decrypt in place inside the secure buffer
        decrypted_block.expose_secret_mut().copy_from_slice(chunk);
        session.decrypt_block(AesBlock::from_mut_slice(
            decrypted_block.expose_secret_mut(),
        ));

        xor_blocks(
            decrypted_block.expose_secret(),
            previous_block.expose_secret(),
            plaintext_block.expose_secret_mut(),
        );
        plaintext
            .expose_secret_mut()
            .extend_from_slice(plaintext_block.expose_secret());

        previous_block.expose_secret_mut().copy_from_slice(chunk);
    }
    drop(session);

    // On error `plaintext` is dropped here and wiped
    let unpadded = pkcs7_unpadded_len(&plaintext.expose_secret()[..])?;
    plaintext.expose_secret_mut().truncate(unpadded);
    debug!(
        "decrypted {} ciphertext bytes into {unpadded} plaintext bytes",
        payload.len()
    );

    Ok(plaintext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decryptor::key::fixed_key;

    #[test]
    fn decrypts_known_vector() {
        // UTF-16LE "ab", AES-256-CBC under the vendor key, zero IV
        let ciphertext = [
            0xa7, 0x91, 0xee, 0x3e, 0xc1, 0xe7, 0xc3, 0x72, 0x70, 0xc6, 0x84, 0xeb, 0xee, 0x9d,
            0x94, 0xc9,
        ];
        let plaintext = decrypt_payload(&ciphertext, &fixed_key()).unwrap();
        assert_eq!(&plaintext.expose_secret()[..], &[0x61, 0x00, 0x62, 0x00]);
    }

    #[test]
    fn rejects_partial_blocks() {
        for len in [0usize, 1, 15, 17, 31] {
            let result = decrypt_payload(&vec![0u8; len], &fixed_key());
            assert!(
                matches!(result, Err(CryptoError::DecryptionFailed(_))),
                "length {len} should be rejected"
            );
        }
    }

    #[test]
    fn multi_block_chaining_and_depadding() {
        // UTF-16LE "P@ssw0rd!": 18 bytes over two blocks, 14 bytes of 0x0e padding
        let ciphertext = [
            0xbd, 0xdd, 0x3d, 0xfa, 0x49, 0x1c, 0xc2, 0xbe, 0x9c, 0x69, 0x22, 0x5b, 0x26, 0x2d,
            0x4f, 0x52, 0x48, 0xab, 0xa7, 0xf2, 0xb5, 0xd2, 0x4f, 0x00, 0xae, 0xed, 0x08, 0x56,
            0x3b, 0x49, 0x02, 0x45,
        ];
        let plaintext = decrypt_payload(&ciphertext, &fixed_key()).unwrap();
        let bytes = &plaintext.expose_secret()[..];
        assert_eq!(bytes.len(), 18);
        assert_eq!(&bytes[..4], &[0x50, 0x00, 0x40, 0x00]);
        assert_eq!(&bytes[16..], &[0x21, 0x00]);
    }

    #[test]
    fn wrong_key_fails_padding() {
        let ciphertext = [
            0xa7, 0x91, 0xee, 0x3e, 0xc1, 0xe7, 0xc3, 0x72, 0x70, 0xc6, 0x84, 0xeb, 0xee, 0x9d,
            0x94, 0xc9,
        ];
        let wrong_key = Aes256Key32::new([0x11; 32]);
        assert!(matches!(
            decrypt_payload(&ciphertext, &wrong_key),
            Err(CryptoError::DecryptionFailed(_))
        ));
    }
}
