//! src/decryptor/padding.rs
//! PKCS#7 padding validation

use crate::consts::AES_BLOCK_SIZE;
use crate::error::CryptoError;
use secure_gate::conversions::SecureConversionsExt;

/// Validate PKCS#7 padding on `plaintext` and return the unpadded length.
///
/// The range check on the pad value is an early return; the pad bytes
/// themselves are compared in constant time.
#[inline(always)]
pub fn pkcs7_unpadded_len(plaintext: &[u8]) -> Result<usize, CryptoError> {
    let padding = *plaintext
        .last()
        .ok_or(CryptoError::DecryptionFailed("missing final plaintext block"))?;

    let pad_len = padding as usize;
    if padding == 0 || pad_len > AES_BLOCK_SIZE || pad_len > plaintext.len() {
        return Err(CryptoError::DecryptionFailed("invalid PKCS#7 padding"));
    }

    let padding_start = plaintext.len() - pad_len;
    let expected_padding = [padding; AES_BLOCK_SIZE];
    let actual_padding_slice = &plaintext[padding_start..];
    let expected_padding_slice = &expected_padding[..pad_len];

    if !actual_padding_slice.ct_eq(expected_padding_slice) {
        return Err(CryptoError::DecryptionFailed("corrupt PKCS#7 padding"));
    }

    Ok(padding_start)
}
