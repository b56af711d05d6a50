//! # Inspect Command
//!
//! Shows the resolved settings a generator would run with, as TOML.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::{
    config::{Options, Settings},
    generator::Generator,
    source::LcgParams,
};

/// Arguments for the inspect command
pub struct InspectArgs {
    pub options: Options,
    pub config: Option<PathBuf>,
}

/// What `inspect` prints
#[derive(Debug, Serialize)]
pub struct Inspection<'a> {
    pub sequence_length: u64,
    pub settings: &'a Settings,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lcg: Option<LcgParams>,
}

impl<'a> Inspection<'a> {
    pub fn of(generator: &'a Generator) -> Self {
        Self {
            sequence_length: generator.period(),
            settings: generator.settings(),
            lcg: generator.lcg(),
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize settings")
    }
}

/// Executes the inspect command.
pub fn execute(args: InspectArgs) -> Result<()> {
    let options = Options::layered(args.config.as_deref(), args.options)?;
    let generator = Generator::new(options).context("Invalid generator options")?;

    print!("{}", Inspection::of(&generator).to_toml()?);
    Ok(())
}
