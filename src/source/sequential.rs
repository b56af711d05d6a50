//! # Sequential Source
//!
//! Ascending counter over `[min, end)` that wraps back to `min`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use crate::error::{Error, Result};

/// Monotonic counter with wraparound
#[derive(Debug, Clone)]
pub struct Sequential {
    min: u64,
    end: u64,
    cursor: u64,
}

impl Sequential {
    /// Creates a counter over the half-open range `[min, end)`, starting at `min`.
    pub fn new(min: u64, end: u64) -> Result<Self> {
        if min >= end {
            return Err(Error::InvalidBounds(format!(
                "empty range: min {min} must be below end {end}"
            )));
        }
        Ok(Self {
            min,
            end,
            cursor: min,
        })
    }

    /// Returns the current index and advances, wrapping after `end - 1`.
    pub fn next_index(&mut self) -> u64 {
        let index = self.cursor;
        self.cursor += 1;
        if self.cursor >= self.end {
            self.cursor = self.min;
        }
        index
    }

    /// Number of calls before the sequence repeats
    pub const fn period(&self) -> u64 {
        self.end - self.min
    }
}

impl Iterator for Sequential {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        Some(self.next_index())
    }
}
