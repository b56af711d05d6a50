//! # Constants
//!
//! Centralized constants for magic values used throughout shortseq.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// Index Space
// =============================================================================

/// Largest index the generator accepts (2^53 - 1).
///
/// Also the default upper bound when neither `max` nor `max_length` is given.
pub const MAX_VALUE: u64 = (1 << 53) - 1;

/// Default alphabet: digits, lowercase, uppercase (62 symbols).
pub const DEFAULT_ALPHABET: &str =
    "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Minimum number of symbols an alphabet must have.
pub const MIN_ALPHABET_LEN: usize = 2;

// =============================================================================
// LCG Parameters
// =============================================================================

/// Increment candidates, tried in order; the first one not dividing the
/// modulus becomes the increment.
pub const INCREMENT_PRIMES: &[u64] = &[
    13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];

// =============================================================================
// File System
// =============================================================================

/// Global configuration directory name (inside `~/.config`).
pub const GLOBAL_CONFIG_DIR: &str = "shortseq";

/// Global configuration file name (inside `GLOBAL_CONFIG_DIR`).
pub const GLOBAL_CONFIG_FILENAME: &str = "config";
