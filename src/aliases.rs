//! # Secure-Gate Type Aliases
//!
//! Buffers that hold key material or plaintext are wrapped in
//! [`secure-gate`](https://github.com/Slurp9187/secure-gate) types so they are
//! zeroized on drop and can only be read through `.expose_secret()`.
//!
//! - [`Aes256Key32`] - the 32-byte AES-256 key
//! - [`Block16`] - one AES block (plaintext, decrypted block or CBC chaining value)
//! - [`PlainText`] - decrypted payload returned by the cipher engine

use secure_gate::dynamic_alias;
use secure_gate::fixed_alias;

// ─────────────────────────────────────────────────────────────────────────────
// SpanBuffer — generic secure stack buffer (direct alias to secure-gate's Fixed)
// ─────────────────────────────────────────────────────────────────────────────
pub type SpanBuffer<const N: usize> = secure_gate::Fixed<[u8; N]>;

pub type Block16 = SpanBuffer<16>; // one AES block

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────
dynamic_alias!(PlainText, Vec<u8>);

// ─────────────────────────────────────────────────────────────────────────────
// Fixed-size concrete secrets
// ─────────────────────────────────────────────────────────────────────────────
fixed_alias!(Aes256Key32, 32); // vendor key
