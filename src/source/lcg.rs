//! # Full-Period LCG Source
//!
//! Linear congruential generator `x -> (a * x + c) mod m` whose parameters
//! are derived from `m` so that the recurrence is a single cycle through
//! every residue (Hull-Dobell). Walking it for `m` steps yields a
//! permutation of `[min, min + m)` without remembering any history.
//!
//! <https://en.wikipedia.org/wiki/Linear_congruential_generator>
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use rand::Rng;
use serde::Serialize;

use crate::{
    constants::{INCREMENT_PRIMES, MAX_VALUE},
    error::{Error, Result},
};

/// Recurrence parameters, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LcgParams {
    pub modulus: u64,
    pub multiplier: u64,
    pub increment: u64,
}

impl LcgParams {
    /// Derives multiplier and increment for `modulus`.
    pub fn for_modulus(modulus: u64) -> Result<Self> {
        if modulus == 0 || modulus > MAX_VALUE + 1 {
            return Err(Error::InvalidBounds(format!(
                "modulus {modulus} outside 1..={}",
                MAX_VALUE + 1
            )));
        }

        let increment = increment_for(modulus, INCREMENT_PRIMES)
            .ok_or(Error::NoCoprimeIncrement { modulus })?;
        Ok(Self {
            modulus,
            multiplier: multiplier_for(modulus),
            increment,
        })
    }

    /// Checks the Hull-Dobell full-period conditions against a true
    /// factorization of the modulus.
    pub fn is_full_period(&self) -> bool {
        let m = self.modulus;
        let a_minus_1 = self.multiplier.wrapping_sub(1);

        gcd(self.increment, m) == 1
            && prime_factors(m).iter().all(|p| a_minus_1 % p == 0)
            && (m % 4 != 0 || a_minus_1 % 4 == 0)
    }
}

/// Pseudorandom permutation of `[min, end)`, repeating with period `end - min`
#[derive(Debug, Clone)]
pub struct Lcg {
    min: u64,
    params: LcgParams,
    value: u64,
}

impl Lcg {
    /// Creates a source over `[min, end)` starting from `seed`.
    ///
    /// Seeds at or above the modulus are reduced modulo it.
    pub fn new(min: u64, end: u64, seed: u64) -> Result<Self> {
        if min >= end {
            return Err(Error::InvalidBounds(format!(
                "empty range: min {min} must be below end {end}"
            )));
        }
        if end > MAX_VALUE + 1 {
            return Err(Error::InvalidBounds(format!(
                "end {end} exceeds {}",
                MAX_VALUE + 1
            )));
        }

        let params = LcgParams::for_modulus(end - min)?;
        debug_assert!(params.is_full_period(), "not a full period: {params:?}");

        tracing::debug!(
            modulus = params.modulus,
            multiplier = params.multiplier,
            increment = params.increment,
            "derived lcg parameters"
        );

        Ok(Self {
            min,
            params,
            value: seed % params.modulus,
        })
    }

    /// Creates a source over `[min, end)` with a seed drawn from `rng`.
    pub fn from_rng<R: Rng + ?Sized>(min: u64, end: u64, rng: &mut R) -> Result<Self> {
        Self::new(min, end, rng.random())
    }

    /// Advances the recurrence and returns the new state offset by `min`.
    pub fn next_index(&mut self) -> u64 {
        let LcgParams {
            modulus,
            multiplier,
            increment,
        } = self.params;

        let next = (u128::from(multiplier) * u128::from(self.value) + u128::from(increment))
            % u128::from(modulus);
        // Reduced modulo a u64
        #[allow(clippy::cast_possible_truncation)]
        {
            self.value = next as u64;
        }

        self.value + self.min
    }

    pub const fn params(&self) -> LcgParams {
        self.params
    }

    pub const fn modulus(&self) -> u64 {
        self.params.modulus
    }

    pub const fn multiplier(&self) -> u64 {
        self.params.multiplier
    }

    pub const fn increment(&self) -> u64 {
        self.params.increment
    }
}

impl Iterator for Lcg {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        Some(self.next_index())
    }
}

/// First candidate prime that does not divide `modulus`.
fn increment_for(modulus: u64, candidates: &[u64]) -> Option<u64> {
    candidates.iter().copied().find(|p| modulus % p != 0)
}

/// Divisors found by trial division from 3 while `i * i < n`, dividing each
/// one out completely; whatever remains above 1 is kept as a final factor.
///
/// Not a prime factorization (4 can show up, 2 never does on its own),
/// but the product divides `modulus` and shares all of its prime factors,
/// which is what the multiplier needs.
fn trial_factors(mut n: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    let mut i = 3;

    while i * i < n {
        if n % i == 0 {
            while n % i == 0 {
                n /= i;
            }
            factors.push(i);
        }
        i += 1;
    }

    if n > 1 {
        factors.push(n);
    }

    factors
}

/// `a = r + 1` where `r` is the product of [`trial_factors`], doubled until
/// divisible by 4 whenever the modulus is.
fn multiplier_for(modulus: u64) -> u64 {
    let mut product: u64 = trial_factors(modulus).iter().product();

    while product % 4 != 0 && modulus % 4 == 0 {
        product *= 2;
    }

    product + 1
}

/// Distinct prime factors, ascending.
fn prime_factors(mut n: u64) -> Vec<u64> {
    let mut primes = Vec::new();
    let mut p = 2;

    while p * p <= n {
        if n % p == 0 {
            primes.push(p);
            while n % p == 0 {
                n /= p;
            }
        }
        p += 1;
    }

    if n > 1 {
        primes.push(n);
    }

    primes
}

const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}
