//! # Alphabet
//!
//! Ordered, duplicate-free symbol set used as the digit table of the codec.
//! Index 0 is the zero digit.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{collections::HashSet, fmt};

use rand::Rng;
use serde::{Serialize, Serializer};

use crate::{
    constants::MIN_ALPHABET_LEN,
    error::{Error, Result},
};

/// Digit table for the base-N codec
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Builds an alphabet from the characters of `symbols`, in order.
    ///
    /// Fails if there are fewer than two symbols or any symbol repeats.
    pub fn new(symbols: &str) -> Result<Self> {
        let symbols: Vec<char> = symbols.chars().collect();

        if symbols.len() < MIN_ALPHABET_LEN {
            return Err(Error::InvalidAlphabet(format!(
                "need at least {MIN_ALPHABET_LEN} symbols, got {}",
                symbols.len()
            )));
        }

        let mut seen = HashSet::with_capacity(symbols.len());
        if let Some(dup) = symbols.iter().find(|c| !seen.insert(**c)) {
            return Err(Error::InvalidAlphabet(format!("duplicate symbol '{dup}'")));
        }

        Ok(Self { symbols })
    }

    /// Builds an alphabet and shuffles it once with the given RNG.
    pub fn shuffled<R: Rng + ?Sized>(symbols: &str, rng: &mut R) -> Result<Self> {
        let mut alphabet = Self::new(symbols)?;
        alphabet.shuffle(rng);
        Ok(alphabet)
    }

    /// Fisher-Yates: walk from the last index down to 1, swapping each
    /// position with one drawn uniformly from `[0, i]`.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.symbols.len()).rev() {
            let j = rng.random_range(0..=i);
            self.symbols.swap(i, j);
        }
    }

    /// Number of symbols (the radix)
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; an alphabet has at least two symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Radix as `u64`, for arithmetic
    pub fn base(&self) -> u64 {
        self.symbols.len() as u64
    }

    /// Symbol for digit `index`
    pub fn symbol(&self, index: usize) -> char {
        self.symbols[index]
    }

    /// The zero digit
    pub fn zero(&self) -> char {
        self.symbols[0]
    }

    /// Digit value of `symbol`, if it belongs to the alphabet
    pub fn position(&self, symbol: char) -> Option<usize> {
        self.symbols.iter().position(|&c| c == symbol)
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.symbols {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl Serialize for Alphabet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
