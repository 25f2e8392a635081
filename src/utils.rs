//! Utility functions used across the library.

use crate::error::DecodeError;

/// Decodes UTF-16LE bytes, rejecting odd lengths and unpaired surrogates.
#[inline(always)]
pub fn utf16le_to_string(input: &[u8]) -> Result<String, DecodeError> {
    if input.len() % 2 != 0 {
        return Err(DecodeError::TextDecode(format!(
            "odd byte count ({}) for UTF-16LE text",
            input.len()
        )));
    }

    let code_units: Vec<u16> = input
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();

    String::from_utf16(&code_units)
        .map_err(|_| DecodeError::TextDecode("unpaired surrogate in UTF-16LE text".into()))
}

/// Decodes UTF-16LE bytes, substituting U+FFFD for unpaired surrogates and a
/// dangling final byte.
#[inline(always)]
pub fn utf16le_to_string_lossy(input: &[u8]) -> String {
    let chunks = input.chunks_exact(2);
    let dangling = !chunks.remainder().is_empty();

    let mut output: String = char::decode_utf16(
        chunks.map(|pair| u16::from_le_bytes([pair[0], pair[1]])),
    )
    .map(|unit| unit.unwrap_or(char::REPLACEMENT_CHARACTER))
    .collect();

    if dangling {
        output.push(char::REPLACEMENT_CHARACTER);
    }
    output
}

/// XORs two 16-byte blocks and writes the result to `output`.
///
/// # Panics (by contract)
///
/// Panics if any of the three slices is shorter than 16 bytes. Every caller
/// passes AES blocks or `Block16` buffers, so this never happens.
#[inline(always)]
pub const fn xor_blocks(block_a: &[u8], block_b: &[u8], output: &mut [u8]) {
    let mut i = 0;
    while i < 16 {
        output[i] = block_a[i] ^ block_b[i];
        i += 1;
    }
}
