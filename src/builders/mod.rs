//! # Builders
//!
//! - [`decode_options`] - options for the decode flow (text mode, payload ceiling)

pub mod decode_options;

pub use decode_options::{DecodeOptions, TextMode};
