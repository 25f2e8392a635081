//! tests/common.rs
//! Fixture encryptor shared across test files – TEST ONLY
//!
//! The library only decrypts. To build round-trip fixtures this mirrors the
//! vendor side: UTF-16LE text, PKCS#7 padding, AES-256-CBC with a zero IV.

use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes256Enc, Block as AesBlock};
use hppw_decrypt::utils::xor_blocks;

/// `_HPPW12_`
#[allow(dead_code)] // Used across multiple test files
pub const MAGIC: &[u8; 8] = b"_HPPW12_";

/// Reference vector: UTF-16LE "ab" under the vendor key (openssl-generated).
#[allow(dead_code)]
pub const AB_CIPHERTEXT_HEX: &str = "a791ee3ec1e7c37270c684ebee9d94c9";

/// UTF-16LE "P@ssw0rd!" under the vendor key: two blocks.
#[allow(dead_code)]
pub const PASSW0RD_CIPHERTEXT_HEX: &str =
    "bddd3dfa491cc2be9c69225b262d4f5248aba7f2b5d24f00aeed08563b490245";

/// A lone high surrogate (00 d8) under the vendor key.
#[allow(dead_code)]
pub const LONE_SURROGATE_CIPHERTEXT_HEX: &str = "a3f0a6e9f5c04b769091a7ccda64f76f";

/// Three plaintext bytes (61 62 63) under the vendor key.
#[allow(dead_code)]
pub const ODD_LENGTH_CIPHERTEXT_HEX: &str = "9eea79808c0da9c1ffd09ec0c357bcaf";

#[allow(dead_code)]
pub fn vendor_key() -> [u8; 32] {
    *hppw_decrypt::fixed_key().expose_secret()
}

#[allow(dead_code)]
pub fn utf16le(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

/// AES-256-CBC encrypt with zero IV and PKCS#7 padding.
#[allow(dead_code)]
pub fn encrypt_payload(plaintext: &[u8], key: &[u8; 32]) -> Vec<u8> {
    let cipher = Aes256Enc::new(key.into());

    let pad = 16 - plaintext.len() % 16;
    let mut padded = plaintext.to_vec();
    padded.resize(plaintext.len() + pad, pad as u8);

    let mut prev_block = [0u8; 16];
    let mut output = Vec::with_capacity(padded.len());
    for chunk in padded.chunks_exact(16) {
        let mut xor_output = [0u8; 16];
        xor_blocks(chunk, &prev_block, &mut xor_output);

        let mut aes_block = AesBlock::from(xor_output);
        cipher.encrypt_block(&mut aes_block);
        prev_block.copy_from_slice(aes_block.as_slice());
        output.extend_from_slice(&prev_block);
    }
    output
}

/// Wrap `payload` in a container, declaring its real length.
#[allow(dead_code)]
pub fn build_container(payload: &[u8]) -> Vec<u8> {
    let length = u16::try_from(payload.len()).expect("payload fits the u16 length field");
    build_container_declaring(length, payload)
}

/// Wrap `payload` in a container with an arbitrary length field.
#[allow(dead_code)]
pub fn build_container_declaring(length: u16, payload: &[u8]) -> Vec<u8> {
    let mut bytes = MAGIC.to_vec();
    bytes.extend_from_slice(&length.to_le_bytes());
    bytes.extend_from_slice(payload);
    bytes
}

/// Full vendor-side encoding of a password.
#[allow(dead_code)]
pub fn encode_password(password: &str) -> Vec<u8> {
    build_container(&encrypt_payload(&utf16le(password), &vendor_key()))
}
