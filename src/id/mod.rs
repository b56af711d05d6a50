//! # ID Encoding
//!
//! Turns integer indices into short strings and back.
//!
//! - [`Alphabet`]: ordered, duplicate-free digit table, optionally shuffled
//! - [`codec`]: base-N encode/decode with optional left padding
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod alphabet;
pub mod codec;

pub use alphabet::Alphabet;
pub use codec::{decode, decode_padded, encode, encode_padded, encoded_len};
