//! # Generate Command
//!
//! Prints the next IDs of a freshly built generator, one per line.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};

use crate::{config::Options, generator::Generator};

/// Arguments for the generate command
pub struct GenerateArgs {
    pub options: Options,
    pub config: Option<PathBuf>,
    pub count: usize,
}

/// Executes the generate command.
pub fn execute(args: GenerateArgs) -> Result<()> {
    let options = Options::layered(args.config.as_deref(), args.options)?;
    let generator = Generator::new(options).context("Invalid generator options")?;

    let stdout = io::stdout();
    write_ids(generator, args.count, &mut stdout.lock())
}

/// Writes `count` IDs from `generator` to `out`, newline-terminated.
pub fn write_ids<W: Write>(generator: Generator, count: usize, out: &mut W) -> Result<()> {
    for id in generator.take(count) {
        writeln!(out, "{id}")?;
    }
    out.flush()?;
    Ok(())
}
