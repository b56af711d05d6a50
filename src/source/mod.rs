//! # Index Sources
//!
//! Infinite, restartable sequences covering a half-open range `[min, end)`
//! exactly once per period:
//!
//! - [`Sequential`]: ascending counter with wraparound
//! - [`Lcg`]: full-period linear congruential permutation
//!
//! Both take an exclusive upper bound; callers with an inclusive `max`
//! pass `max + 1`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod lcg;
mod sequential;

pub use self::{
    lcg::{Lcg, LcgParams},
    sequential::Sequential,
};

/// The index source owned by a generator
#[derive(Debug, Clone)]
pub enum IndexSource {
    Sequential(Sequential),
    Lcg(Lcg),
}

impl IndexSource {
    /// Pulls the next index.
    pub fn next_index(&mut self) -> u64 {
        match self {
            Self::Sequential(source) => source.next_index(),
            Self::Lcg(source) => source.next_index(),
        }
    }

    /// Number of indices per cycle
    pub const fn period(&self) -> u64 {
        match self {
            Self::Sequential(source) => source.period(),
            Self::Lcg(source) => source.modulus(),
        }
    }

    /// LCG parameters, if this is the randomized source
    pub const fn lcg(&self) -> Option<LcgParams> {
        match self {
            Self::Sequential(_) => None,
            Self::Lcg(source) => Some(source.params()),
        }
    }
}

impl From<Sequential> for IndexSource {
    fn from(source: Sequential) -> Self {
        Self::Sequential(source)
    }
}

impl From<Lcg> for IndexSource {
    fn from(source: Lcg) -> Self {
        Self::Lcg(source)
    }
}

impl Iterator for IndexSource {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        Some(self.next_index())
    }
}
