//! # Base-N Codec
//!
//! Positional encoding of a `u64` over an [`Alphabet`], most significant
//! digit first, plus the inverse and the length formula used to derive
//! bounds from lengths.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use super::Alphabet;
use crate::error::{Error, Result};

/// Encodes `value` in base `alphabet.len()`.
///
/// Zero encodes to the single zero digit, never to an empty string.
pub fn encode(mut value: u64, alphabet: &Alphabet) -> String {
    if value == 0 {
        return alphabet.zero().to_string();
    }

    let base = alphabet.base();
    let mut digits = Vec::with_capacity(encoded_len(value, base));

    while value > 0 {
        // Remainder is < base, which came from a usize
        #[allow(clippy::cast_possible_truncation)]
        digits.push(alphabet.symbol((value % base) as usize));
        value /= base;
    }

    digits.iter().rev().collect()
}

/// Encodes `value`, left-padding with `pad` up to `width` characters.
///
/// Without a pad symbol the natural encoding is returned. Padding never
/// truncates: encodings already `width` long or longer are unchanged.
pub fn encode_padded(value: u64, alphabet: &Alphabet, pad: Option<char>, width: usize) -> String {
    let encoded = encode(value, alphabet);

    let Some(pad) = pad else {
        return encoded;
    };

    let len = encoded.chars().count();
    if len >= width {
        return encoded;
    }

    let mut result = String::with_capacity(width);
    result.extend(std::iter::repeat_n(pad, width - len));
    result.push_str(&encoded);
    result
}

/// Decodes a string produced by [`encode`] back to its value.
pub fn decode(input: &str, alphabet: &Alphabet) -> Result<u64> {
    if input.is_empty() {
        return Err(Error::EmptyInput);
    }

    let base = alphabet.base();
    input
        .chars()
        .enumerate()
        .try_fold(0u64, |acc, (position, symbol)| {
            let digit = alphabet
                .position(symbol)
                .ok_or(Error::UnknownSymbol { symbol, position })?;
            acc.checked_mul(base)
                .and_then(|v| v.checked_add(digit as u64))
                .ok_or(Error::DecodeOverflow)
        })
}

/// Decodes a possibly padded string.
///
/// Leading pad symbols are stripped only when the pad symbol is not part
/// of the alphabet. A pad equal to the zero digit decodes naturally; a pad
/// equal to any other digit is indistinguishable from data.
pub fn decode_padded(input: &str, alphabet: &Alphabet, pad: Option<char>) -> Result<u64> {
    match pad {
        Some(pad) if !alphabet.contains(pad) => decode(input.trim_start_matches(pad), alphabet),
        _ => decode(input, alphabet),
    }
}

/// Number of digits needed to write `value` in base `base`.
///
/// `encoded_len(0, b)` is 1, matching [`encode`]'s output for zero.
pub fn encoded_len(value: u64, base: u64) -> usize {
    if value == 0 {
        return 1;
    }

    let mut len = 0;
    let mut power: u128 = 1;
    while power <= u128::from(value) {
        len += 1;
        power *= u128::from(base);
    }
    len
}
