//! # Test Harness
//!
//! Isolates integration tests from the user's configuration. Library calls
//! see a temporary home through the thread-local override; spawned binaries
//! get it through `HOME`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};

use assert_cmd::Command;
use tempfile::TempDir;

use shortseq::set_home_override;

/// Serializes tests that touch the home override.
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Temporary home and working directories for one test
pub struct TestEnv {
    /// Simulated home (for ~/.config/shortseq/config)
    pub home_dir: TempDir,
    /// Scratch directory for options files
    pub work_dir: TempDir,
    _guard: MutexGuard<'static, ()>,
}

impl TestEnv {
    pub fn new() -> Self {
        // Recover from poisoned mutex (if a previous test panicked while holding the lock)
        let guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let home_dir = TempDir::new().expect("Failed to create temp home dir");
        let work_dir = TempDir::new().expect("Failed to create temp work dir");

        set_home_override(Some(home_dir.path().to_path_buf()));

        Self {
            home_dir,
            work_dir,
            _guard: guard,
        }
    }

    /// Returns the path where global config would be stored.
    pub fn global_config_path(&self) -> PathBuf {
        self.home_dir
            .path()
            .join(".config")
            .join("shortseq")
            .join("config")
    }

    /// Creates a global config file with the given content.
    pub fn write_global_config(&self, content: &str) {
        let path = self.global_config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create global config directory");
        }
        fs::write(path, content).expect("Failed to write global config");
    }

    /// Reads the global config file content.
    pub fn read_global_config(&self) -> String {
        fs::read_to_string(self.global_config_path()).unwrap_or_default()
    }

    /// Writes an options file into the work directory and returns its path.
    pub fn write_options_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.path().join(name);
        fs::write(&path, content).expect("Failed to write options file");
        path
    }

    pub fn work_path(&self) -> &Path {
        self.work_dir.path()
    }

    /// A `shortseq` command running against this environment.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("shortseq").expect("binary should be built");
        cmd.current_dir(self.work_dir.path())
            .env("HOME", self.home_dir.path())
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        set_home_override(None);
    }
}

// =============================================================================
// Options File Builder
// =============================================================================

/// Builds TOML options files one key at a time.
#[derive(Default)]
pub struct OptionsFile(Vec<String>);

impl OptionsFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn string(mut self, key: &str, value: &str) -> Self {
        self.0.push(format!("{key} = \"{value}\""));
        self
    }

    pub fn int(mut self, key: &str, value: u64) -> Self {
        self.0.push(format!("{key} = {value}"));
        self
    }

    pub fn flag(mut self, key: &str, value: bool) -> Self {
        self.0.push(format!("{key} = {value}"));
        self
    }

    pub fn build(self) -> String {
        let mut content = self.0.join("\n");
        content.push('\n');
        content
    }
}

/// Splits command output into lines.
pub fn lines(output: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(output)
        .lines()
        .map(str::to_string)
        .collect()
}
