//! # Errors
//!
//! Error type for the generator core. Every variant is raised while building
//! an alphabet, index source or generator, or while decoding; generating an
//! ID never fails.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use thiserror::Error;

/// A specialized `Result` type for shortseq core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Construction and decoding failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// `min`/`max` outside the accepted domain or not strictly ordered
    #[error("invalid bounds: {0}")]
    InvalidBounds(String),

    /// Alphabet too short or containing duplicate symbols
    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(String),

    /// `min_length`/`max_length` out of range or not ordered
    #[error("invalid length: {0}")]
    InvalidLength(String),

    /// Prefix is not a single symbol, or would collide with a digit
    #[error("invalid prefix '{prefix}': {reason}")]
    InvalidPrefix {
        /// The prefix as given
        prefix: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Every increment candidate divides the modulus.
    ///
    /// Guard only: the product of the candidate primes is far above any
    /// accepted modulus, so a coprime candidate always exists.
    #[error("no increment candidate is coprime to modulus {modulus}")]
    NoCoprimeIncrement {
        /// Size of the index range
        modulus: u64,
    },

    /// Input contains a symbol that is not in the alphabet
    #[error("symbol '{symbol}' at position {position} is not in the alphabet")]
    UnknownSymbol {
        /// The offending symbol
        symbol: char,
        /// Character position within the input
        position: usize,
    },

    /// Decoded value does not fit in a `u64`
    #[error("decoded value does not fit in 64 bits")]
    DecodeOverflow,

    /// Nothing to decode
    #[error("cannot decode an empty string")]
    EmptyInput,
}
