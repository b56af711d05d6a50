//! # Configuration
//!
//! User-facing [`Options`] (every field optional, loadable from TOML and
//! layered from several sources) and the resolved, immutable [`Settings`]
//! a generator is built from.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod global;

use std::{fs, path::Path};

use anyhow::Context;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub use self::global::{set_home_override, GlobalConfig};
use crate::{
    constants::{DEFAULT_ALPHABET, MAX_VALUE},
    error::{Error, Result},
    id::{encoded_len, Alphabet},
};

/// Generator options as written by users.
///
/// `min_length`/`max_length` take precedence over `min`/`max` when both are
/// given. The legacy names `min_chars`/`max_chars` are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Smallest index (inclusive)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<u64>,

    /// Largest index (inclusive)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u64>,

    /// Shortest ID; sets `min` to the first value of that length
    #[serde(alias = "min_chars", skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    /// Longest ID; sets `max` to the last value of that length
    #[serde(alias = "max_chars", skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    /// Symbol set (default: digits, lowercase, uppercase)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alphabet: Option<String>,

    /// Shuffle the alphabet once at construction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shuffle: Option<bool>,

    /// Walk the range in full-period pseudorandom order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub random: Option<bool>,

    /// Pad every ID to `max_length`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_length: Option<bool>,

    /// Pad symbol
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// Starting state for the random order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Options {
    /// Loads options from a TOML file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read options file: {}", path.display()))?;

        let options = toml::from_str(&content)
            .with_context(|| format!("Failed to parse options file: {}", path.display()))?;

        tracing::info!(path = %path.display(), "loaded options file");
        Ok(options)
    }

    /// Collects options from every source, later ones winning: the global
    /// config, then the options file at `path` (if given), then `overrides`.
    pub fn layered(path: Option<&Path>, overrides: Self) -> anyhow::Result<Self> {
        let mut options = GlobalConfig::load()?;
        if let Some(path) = path {
            options = options.merge(Self::load(path)?);
        }
        Ok(options.merge(overrides))
    }

    /// Layers `overrides` on top of `self`; fields set in `overrides` win.
    #[must_use]
    pub fn merge(self, overrides: Self) -> Self {
        Self {
            min: overrides.min.or(self.min),
            max: overrides.max.or(self.max),
            min_length: overrides.min_length.or(self.min_length),
            max_length: overrides.max_length.or(self.max_length),
            alphabet: overrides.alphabet.or(self.alphabet),
            shuffle: overrides.shuffle.or(self.shuffle),
            random: overrides.random.or(self.random),
            fixed_length: overrides.fixed_length.or(self.fixed_length),
            prefix: overrides.prefix.or(self.prefix),
            seed: overrides.seed.or(self.seed),
        }
    }

    /// Fills defaults, derives bounds and lengths from each other, and
    /// validates everything. `rng` is only used to shuffle the alphabet.
    pub fn resolve<R: Rng + ?Sized>(self, rng: &mut R) -> Result<Settings> {
        let symbols = self.alphabet.as_deref().unwrap_or(DEFAULT_ALPHABET);
        let shuffle = self.shuffle.unwrap_or(false);
        let alphabet = if shuffle {
            Alphabet::shuffled(symbols, rng)?
        } else {
            Alphabet::new(symbols)?
        };
        let base = alphabet.base();

        let (min, min_length) = match self.min_length {
            Some(len) => (lower_bound(len, base)?, len),
            None => {
                let min = self.min.unwrap_or(0);
                (min, encoded_len(min, base))
            }
        };

        let (max, max_length) = match self.max_length {
            Some(len) => (upper_bound(len, base)?, len),
            None => {
                let max = self.max.unwrap_or(MAX_VALUE);
                (max, encoded_len(max, base))
            }
        };

        if let (Some(lo), Some(hi)) = (self.min_length, self.max_length) {
            if lo > hi {
                return Err(Error::InvalidLength(format!(
                    "min_length {lo} is greater than max_length {hi}"
                )));
            }
        }
        if max > MAX_VALUE {
            return Err(Error::InvalidBounds(format!(
                "max {max} exceeds {MAX_VALUE}"
            )));
        }
        if min >= max {
            return Err(Error::InvalidBounds(format!(
                "min {min} must be less than max {max}"
            )));
        }

        let prefix = match self.prefix.as_deref() {
            None | Some("") => None,
            Some(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    // Padding with any other digit would make two indices
                    // encode to the same ID
                    (Some(c), None) if alphabet.contains(c) && c != alphabet.zero() => {
                        return Err(Error::InvalidPrefix {
                            prefix: s.to_string(),
                            reason: "only the zero digit may be used from the alphabet",
                        });
                    }
                    (Some(c), None) => Some(c),
                    _ => {
                        return Err(Error::InvalidPrefix {
                            prefix: s.to_string(),
                            reason: "must be a single character",
                        });
                    }
                }
            }
        };

        let settings = Settings {
            min,
            max,
            min_length,
            max_length,
            alphabet,
            shuffle,
            random: self.random.unwrap_or(false),
            fixed_length: self.fixed_length.unwrap_or(false),
            prefix,
            // The LCG state lives in [0, max - min]
            seed: self.seed.map(|seed| seed % (max - min + 1)),
        };

        tracing::debug!(?settings, "resolved settings");
        Ok(settings)
    }
}

/// First value with `len` digits (`0` for length 1).
fn lower_bound(len: usize, base: u64) -> Result<u64> {
    match len {
        0 => Err(length_error("min_length", len, base)),
        1 => Ok(0),
        _ => length_power(len - 1, base)
            .filter(|&min| min <= MAX_VALUE)
            .ok_or_else(|| length_error("min_length", len, base)),
    }
}

/// Last value with `len` digits.
fn upper_bound(len: usize, base: u64) -> Result<u64> {
    if len == 0 {
        return Err(length_error("max_length", len, base));
    }
    length_power(len, base)
        .map(|power| power - 1)
        .filter(|&max| max <= MAX_VALUE)
        .ok_or_else(|| length_error("max_length", len, base))
}

fn length_power(exp: usize, base: u64) -> Option<u64> {
    u32::try_from(exp)
        .ok()
        .and_then(|exp| base.checked_pow(exp))
}

fn length_error(field: &str, len: usize, base: u64) -> Error {
    Error::InvalidLength(format!(
        "{field} {len} is outside 1..={} for a {base}-symbol alphabet",
        encoded_len(MAX_VALUE, base)
    ))
}

/// Fully resolved generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub min: u64,
    pub max: u64,
    pub min_length: usize,
    pub max_length: usize,
    pub alphabet: Alphabet,
    pub shuffle: bool,
    pub random: bool,
    pub fixed_length: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<char>,
    /// Starting state of the random order, already reduced modulo the
    /// sequence length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Settings {
    /// Pad symbol and target width, if output is padded.
    ///
    /// `fixed_length` pads to `max_length` with the prefix, or the zero digit
    /// when no prefix is set. Otherwise a prefix pads to `min_length`.
    pub fn padding(&self) -> Option<(char, usize)> {
        if self.fixed_length {
            Some((
                self.prefix.unwrap_or_else(|| self.alphabet.zero()),
                self.max_length,
            ))
        } else {
            self.prefix.map(|pad| (pad, self.min_length))
        }
    }

    /// Number of distinct IDs before the sequence repeats
    pub const fn sequence_length(&self) -> u64 {
        self.max - self.min + 1
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn resolve(options: Options) -> Result<Settings> {
        options.resolve(&mut StdRng::seed_from_u64(0))
    }

    fn base5(options: Options) -> Options {
        Options {
            alphabet: Some("01234".to_string()),
            ..options
        }
    }

    #[test]
    fn test_defaults() {
        let settings = resolve(Options::default()).unwrap();
        assert_eq!(settings.alphabet.to_string(), DEFAULT_ALPHABET);
        assert_eq!(settings.min, 0);
        assert_eq!(settings.max, MAX_VALUE);
        assert_eq!(settings.min_length, 1);
        assert_eq!(settings.max_length, 9);
        assert!(!settings.shuffle);
        assert!(!settings.random);
        assert!(!settings.fixed_length);
        assert_eq!(settings.prefix, None);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_lengths_derived_from_bounds() {
        let cases = [(0, 5, 1, 2), (4, 6, 1, 2), (24, 25, 2, 3)];
        for (min, max, min_length, max_length) in cases {
            let settings = resolve(base5(Options {
                min: Some(min),
                max: Some(max),
                ..Options::default()
            }))
            .unwrap();
            assert_eq!(settings.min_length, min_length, "min {min}");
            assert_eq!(settings.max_length, max_length, "max {max}");
        }
    }

    #[test]
    fn test_bounds_derived_from_lengths() {
        let settings = resolve(base5(Options {
            min_length: Some(1),
            max_length: Some(1),
            ..Options::default()
        }))
        .unwrap();
        assert_eq!((settings.min, settings.max), (0, 4));

        let settings = resolve(base5(Options {
            min_length: Some(2),
            max_length: Some(2),
            ..Options::default()
        }))
        .unwrap();
        assert_eq!((settings.min, settings.max), (5, 24));
    }

    #[test]
    fn test_lengths_override_bounds() {
        let settings = resolve(base5(Options {
            min: Some(0),
            max: Some(5),
            min_length: Some(2),
            max_length: Some(3),
            ..Options::default()
        }))
        .unwrap();
        assert_eq!((settings.min, settings.max), (5, 124));
    }

    #[test]
    fn test_equal_bounds_rejected() {
        let err = resolve(Options {
            min: Some(5),
            max: Some(5),
            ..Options::default()
        })
        .unwrap_err();
        assert!(matches!(err, Error::InvalidBounds(_)));
    }

    #[test]
    fn test_max_above_domain_rejected() {
        let err = resolve(Options {
            max: Some(MAX_VALUE + 1),
            ..Options::default()
        })
        .unwrap_err();
        assert!(matches!(err, Error::InvalidBounds(_)));
    }

    #[test]
    fn test_empty_alphabet_rejected() {
        let err = resolve(Options {
            alphabet: Some(String::new()),
            ..Options::default()
        })
        .unwrap_err();
        assert!(matches!(err, Error::InvalidAlphabet(_)));
    }

    #[test]
    fn test_zero_length_rejected() {
        for options in [
            Options {
                min_length: Some(0),
                ..Options::default()
            },
            Options {
                max_length: Some(0),
                ..Options::default()
            },
        ] {
            assert!(matches!(resolve(options), Err(Error::InvalidLength(_))));
        }
    }

    #[test]
    fn test_length_above_domain_rejected() {
        // 62^9 - 1 does not fit below 2^53
        let err = resolve(Options {
            max_length: Some(9),
            ..Options::default()
        })
        .unwrap_err();
        assert!(matches!(err, Error::InvalidLength(_)));

        let settings = resolve(Options {
            max_length: Some(8),
            ..Options::default()
        })
        .unwrap();
        assert_eq!(settings.max, 62u64.pow(8) - 1);
    }

    #[test]
    fn test_min_length_above_max_length_rejected() {
        let err = resolve(base5(Options {
            min_length: Some(3),
            max_length: Some(2),
            ..Options::default()
        }))
        .unwrap_err();
        assert!(matches!(err, Error::InvalidLength(_)));
    }

    #[test]
    fn test_prefix_must_be_single_symbol() {
        let err = resolve(Options {
            prefix: Some("ab".to_string()),
            ..Options::default()
        })
        .unwrap_err();
        assert_eq!(
            err,
            Error::InvalidPrefix {
                prefix: "ab".to_string(),
                reason: "must be a single character",
            }
        );

        let settings = resolve(Options {
            prefix: Some(String::new()),
            ..Options::default()
        })
        .unwrap();
        assert_eq!(settings.prefix, None);
    }

    #[test]
    fn test_prefix_must_not_be_nonzero_digit() {
        let err = resolve(base5(Options {
            max: Some(124),
            fixed_length: Some(true),
            prefix: Some("1".to_string()),
            ..Options::default()
        }))
        .unwrap_err();
        assert!(matches!(err, Error::InvalidPrefix { ref prefix, .. } if prefix == "1"));

        // The zero digit pads without changing the value
        let settings = resolve(base5(Options {
            max: Some(124),
            fixed_length: Some(true),
            prefix: Some("0".to_string()),
            ..Options::default()
        }))
        .unwrap();
        assert_eq!(settings.padding(), Some(('0', 3)));
    }

    #[test]
    fn test_padding_policy() {
        let plain = resolve(base5(Options::default())).unwrap();
        assert_eq!(plain.padding(), None);

        let fixed = resolve(base5(Options {
            max: Some(124),
            fixed_length: Some(true),
            ..Options::default()
        }))
        .unwrap();
        assert_eq!(fixed.padding(), Some(('0', 3)));

        let prefixed = resolve(base5(Options {
            min_length: Some(2),
            max_length: Some(4),
            prefix: Some("-".to_string()),
            ..Options::default()
        }))
        .unwrap();
        assert_eq!(prefixed.padding(), Some(('-', 2)));
    }

    #[test]
    fn test_shuffle_uses_rng() {
        let settings = resolve(Options {
            shuffle: Some(true),
            ..Options::default()
        })
        .unwrap();
        assert_ne!(settings.alphabet.to_string(), DEFAULT_ALPHABET);
        assert_eq!(settings.alphabet.len(), 62);
    }

    #[test]
    fn test_merge_prefers_overrides() {
        let file = Options {
            min: Some(1),
            alphabet: Some("abc".to_string()),
            random: Some(true),
            ..Options::default()
        };
        let cli = Options {
            min: Some(2),
            random: Some(false),
            ..Options::default()
        };

        let merged = file.merge(cli);
        assert_eq!(merged.min, Some(2));
        assert_eq!(merged.alphabet.as_deref(), Some("abc"));
        assert_eq!(merged.random, Some(false));
    }

    #[test]
    fn test_parse_options() {
        let toml = r#"
alphabet = "01234"
min_length = 2
max = 100
random = true
seed = 42
"#;
        let options: Options = toml::from_str(toml).unwrap();
        assert_eq!(options.alphabet.as_deref(), Some("01234"));
        assert_eq!(options.min_length, Some(2));
        assert_eq!(options.max, Some(100));
        assert_eq!(options.random, Some(true));
        assert_eq!(options.seed, Some(42));
        assert_eq!(options.shuffle, None);
    }

    #[test]
    fn test_parse_legacy_field_names() {
        let toml = r"
min_chars = 2
max_chars = 4
";
        let options: Options = toml::from_str(toml).unwrap();
        assert_eq!(options.min_length, Some(2));
        assert_eq!(options.max_length, Some(4));
    }

    #[test]
    fn test_negative_min_rejected_by_parser() {
        assert!(toml::from_str::<Options>("min = -1").is_err());
    }

    #[test]
    fn test_seed_reduced_to_sequence_length() {
        let settings = resolve(Options {
            max: Some(999),
            random: Some(true),
            seed: Some(u64::MAX),
            ..Options::default()
        })
        .unwrap();
        assert_eq!(settings.seed, Some(615));

        let settings = resolve(Options {
            min: Some(10),
            max: Some(19),
            seed: Some(7),
            ..Options::default()
        })
        .unwrap();
        assert_eq!(settings.seed, Some(7));
    }

    #[test]
    fn test_sequence_length() {
        let settings = resolve(base5(Options {
            min: Some(0),
            max: Some(5),
            ..Options::default()
        }))
        .unwrap();
        assert_eq!(settings.sequence_length(), 6);
    }
}
