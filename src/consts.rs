//! # Constants
//!
//! Container layout, cipher geometry and the embedded key.

/// Magic value at offset 0 of every container (`_HPPW12_`).
pub const HPPW_MAGIC: [u8; 8] = *b"_HPPW12_";

/// Size of the magic value in bytes.
pub const MAGIC_LEN: usize = 8;

/// Size of the little-endian payload length field.
pub const LENGTH_FIELD_LEN: usize = 2;

/// Bytes preceding the payload (magic + length).
pub const HEADER_LEN: usize = MAGIC_LEN + LENGTH_FIELD_LEN;

/// Largest payload the vendor tool accepts (its 1 KiB working buffer).
pub const MAX_PAYLOAD_LEN: u16 = 1024;

/// AES block size.
pub const AES_BLOCK_SIZE: usize = 16;

/// AES-256 key size.
pub const AES256_KEY_LEN: usize = 32;

/// Raw AES-256 key used by the vendor utility for every file.
///
/// These are the key bytes of the vendor's `PLAINTEXTKEYBLOB`; the 12-byte blob
/// header (`08 02 00 00 10 66 00 00 20 00 00 00`) only describes the key to the
/// Windows provider and is not part of the key.
pub(crate) const FIXED_KEY_BYTES: [u8; AES256_KEY_LEN] = [
    0x4a, 0x14, 0xb6, 0x96, 0x32, 0xff, 0x83, 0x6b, 0x42, 0x88, 0xda, 0x79, 0xa5, 0x49, 0xed, 0x9d,
    0x1c, 0x0b, 0xd3, 0x77, 0x83, 0x9f, 0xe2, 0xd6, 0x52, 0x54, 0x71, 0x0c, 0x3e, 0xbd, 0x1e, 0x33,
];

/// One-line usage text printed when the tool is run without a file.
pub const USAGE: &str = "usage: hpqpswdd [--lossy] [--no-buffer-limit] [drive:][path]filename";
