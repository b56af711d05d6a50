//! # shortseq
//!
//! Short, unique, reproducible string IDs drawn from a bounded integer range.
//!
//! Indices come either in ascending order or in a shuffled order that still
//! visits every index exactly once per cycle, then get written in a
//! configurable alphabet with optional fixed-width padding.
//!
//! ## Features
//!
//! - **Full-Period Shuffle**: an LCG whose parameters are derived from the range
//!   size, so the order looks random but never repeats within a cycle
//! - **Custom Alphabets**: any set of unique symbols, optionally shuffled
//! - **Length-Driven Ranges**: describe the range by ID length instead of bounds
//! - **Reproducible**: seeds and RNGs are injectable
//!
//! ```
//! use shortseq::{Generator, Options};
//!
//! let mut ids = Generator::new(Options {
//!     alphabet: Some("01234".to_string()),
//!     max: Some(5),
//!     ..Options::default()
//! })
//! .unwrap();
//!
//! assert_eq!(ids.generate(), "0");
//! assert_eq!(ids.nth(4).unwrap(), "10");
//! ```
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod generator;
pub mod id;
pub mod source;

pub use config::{set_home_override, GlobalConfig, Options, Settings};
pub use error::{Error, Result};
pub use generator::Generator;
pub use id::Alphabet;
pub use source::{IndexSource, Lcg, LcgParams, Sequential};
