//! # Global Configuration
//!
//! Default generator options stored at `~/.config/shortseq/config`.
//! The file is optional; when it is missing every option takes its
//! built-in default.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{cell::RefCell, fs, path::PathBuf};

use anyhow::{Context, Result};

use super::Options;
use crate::constants::{DEFAULT_ALPHABET, GLOBAL_CONFIG_DIR, GLOBAL_CONFIG_FILENAME};

/// Valid field names in the config file, including legacy aliases.
const VALID_FIELDS: &[&str] = &[
    "min",
    "max",
    "min_length",
    "max_length",
    "min_chars",
    "max_chars",
    "alphabet",
    "shuffle",
    "random",
    "fixed_length",
    "prefix",
    "seed",
];

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by integration tests to redirect config to a temp directory
    /// without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

fn get_home_override() -> Option<PathBuf> {
    HOME_OVERRIDE.with(|cell| cell.borrow().clone())
}

/// Location and lifecycle of the global config file
pub struct GlobalConfig;

impl GlobalConfig {
    /// Returns the path to the global config file (~/.config/shortseq/config)
    ///
    /// Checks for a thread-local home override first (used by tests),
    /// then falls back to $HOME/.config (XDG Base Directory).
    pub fn path() -> Option<PathBuf> {
        Self::dir().map(|dir| dir.join(GLOBAL_CONFIG_FILENAME))
    }

    /// Returns the path to the global config directory (~/.config/shortseq)
    pub fn dir() -> Option<PathBuf> {
        get_home_override()
            .or_else(dirs::home_dir)
            .map(|home| home.join(".config").join(GLOBAL_CONFIG_DIR))
    }

    /// Loads default options from the global config file.
    ///
    /// A missing file (or undeterminable home directory) yields empty options.
    /// Unknown fields are reported with a warning and otherwise ignored.
    pub fn load() -> Result<Options> {
        let Some(path) = Self::path() else {
            tracing::debug!("no home directory, skipping global config");
            return Ok(Options::default());
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "global config not found");
            return Ok(Options::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read global config: {}", path.display()))?;

        let table: toml::Table = toml::from_str(&content)
            .with_context(|| format!("Failed to parse global config: {}", path.display()))?;

        for key in unknown_fields(&table) {
            tracing::warn!(field = %key, path = %path.display(), "ignoring unknown config field");
        }

        let options = toml::Value::Table(table)
            .try_into::<Options>()
            .with_context(|| format!("Invalid global config: {}", path.display()))?;

        tracing::info!(path = %path.display(), "loaded global config");
        Ok(options)
    }

    /// Creates the global config with commented defaults.
    /// Returns true if created, false if it already exists.
    pub fn create_default_if_missing() -> Result<bool> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine config directory");
        };

        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(&path, template())
            .with_context(|| format!("Failed to write global config: {}", path.display()))?;

        tracing::info!(path = %path.display(), "created global config");
        Ok(true)
    }
}

/// Top-level keys that are not generator options.
fn unknown_fields(table: &toml::Table) -> Vec<&str> {
    table
        .keys()
        .map(String::as_str)
        .filter(|key| !VALID_FIELDS.contains(key))
        .collect()
}

/// Commented config file listing every option.
fn template() -> String {
    format!(
        r#"# shortseq Global Configuration
# Default options for every shortseq invocation. Command-line flags win.
# Location: ~/.config/shortseq/config

# Symbol set used to write IDs. Symbols must be unique, at least 2.
# alphabet = "{DEFAULT_ALPHABET}"

# Shuffle the alphabet once per run (IDs stop being predictable but also
# stop being reproducible across runs).
# shuffle = false

# Index range (inclusive). Default: 0 to 9007199254740991.
# min = 0
# max = 9007199254740991

# Alternative to min/max: shortest and longest ID length.
# By default both follow from min/max (1 and 9 with the default alphabet).
# Lengths whose last value exceeds 9007199254740991 are rejected, so the
# longest settable max_length with the default alphabet is 8.
# min_length = 1
# max_length = 8

# Walk the range in a shuffled order that still visits every index
# exactly once per cycle.
# random = false

# Starting point of the shuffled order, for reproducible output.
# seed = 42

# Pad every ID to max_length (with prefix, or the first alphabet symbol).
# fixed_length = false

# Pad symbol.
# prefix = "0"
"#
    )
}
