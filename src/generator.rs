//! # Generator
//!
//! Owns resolved [`Settings`] and one [`IndexSource`], and turns each
//! pulled index into an encoded ID.
//!
//! A generator is a single mutable cursor. It is `Send` but not meant to be
//! shared: concurrent issuers need one generator each or an external lock,
//! otherwise the exactly-once-per-cycle guarantee is lost.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use rand::Rng;

use crate::{
    config::{Options, Settings},
    error::Result,
    id::{decode_padded, encode, encode_padded},
    source::{IndexSource, Lcg, LcgParams, Sequential},
};

/// Issues short IDs, sequential or full-period shuffled
#[derive(Debug, Clone)]
pub struct Generator {
    settings: Settings,
    source: IndexSource,
}

impl Generator {
    /// Builds a generator using the thread RNG for shuffling and seeding.
    pub fn new(options: Options) -> Result<Self> {
        Self::with_rng(options, &mut rand::rng())
    }

    /// Builds a generator drawing all randomness from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(options: Options, rng: &mut R) -> Result<Self> {
        let settings = options.resolve(rng)?;
        Self::from_settings(settings, rng)
    }

    /// Builds a generator from already resolved settings.
    ///
    /// `rng` seeds the random order when `settings.seed` is unset.
    pub fn from_settings<R: Rng + ?Sized>(settings: Settings, rng: &mut R) -> Result<Self> {
        // Sources take an exclusive end
        let end = settings.max + 1;

        let source = if settings.random {
            let seed = settings.seed.unwrap_or_else(|| rng.random());
            IndexSource::from(Lcg::new(settings.min, end, seed)?)
        } else {
            IndexSource::from(Sequential::new(settings.min, end)?)
        };

        tracing::debug!(
            min = settings.min,
            max = settings.max,
            random = settings.random,
            "generator ready"
        );

        Ok(Self { settings, source })
    }

    /// Returns the next ID.
    pub fn generate(&mut self) -> String {
        let index = self.source.next_index();
        match self.settings.padding() {
            Some((pad, width)) => encode_padded(index, &self.settings.alphabet, Some(pad), width),
            None => encode(index, &self.settings.alphabet),
        }
    }

    /// Recovers the index an ID was generated from.
    pub fn decode(&self, id: &str) -> Result<u64> {
        let pad = self.settings.padding().map(|(pad, _)| pad);
        decode_padded(id, &self.settings.alphabet, pad)
    }

    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// LCG parameters when generating in random order
    pub const fn lcg(&self) -> Option<LcgParams> {
        self.source.lcg()
    }

    /// Number of IDs before the sequence repeats
    pub const fn period(&self) -> u64 {
        self.source.period()
    }
}

impl Iterator for Generator {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        Some(self.generate())
    }
}
