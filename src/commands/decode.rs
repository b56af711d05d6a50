//! # Decode Command
//!
//! Maps IDs back to the indices they were generated from.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::{config::Options, generator::Generator};

/// Arguments for the decode command
pub struct DecodeArgs {
    pub ids: Vec<String>,
    pub options: Options,
    pub config: Option<PathBuf>,
}

/// Executes the decode command.
pub fn execute(args: DecodeArgs) -> Result<()> {
    let options = Options::layered(args.config.as_deref(), args.options)?;
    if options.shuffle == Some(true) {
        tracing::warn!("alphabet is shuffled per run; decoded values will not match earlier IDs");
    }

    let generator = Generator::new(options).context("Invalid generator options")?;

    for id in &args.ids {
        let index = generator
            .decode(id)
            .with_context(|| format!("Cannot decode '{id}'"))?;
        println!("{index}");
    }

    Ok(())
}
