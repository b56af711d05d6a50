//! # shortseq CLI
//!
//! Command-line interface for the shortseq ID generator.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use owo_colors::OwoColorize;

use shortseq::{
    commands::{self, DecodeArgs, GenerateArgs, InspectArgs},
    Options,
};

const GLOBAL_HELP: &str = "\
Configuration Files:
  ~/.config/shortseq/config   Default options (TOML, same keys as the flags)

Option Precedence:
  built-in defaults < global config < --config FILE < command-line flags

Getting Started:
  shortseq generate -n 5                    Five IDs: 0 1 2 3 4
  shortseq generate --random --seed 7       Shuffled order, reproducible
  shortseq generate --max-length 4 --fixed-length
  shortseq inspect --random                 Show resolved settings

Learn more:
  shortseq <COMMAND> --help        Show detailed help for a command";

#[derive(Parser)]
#[command(name = "shortseq")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Short, unique, reproducible string IDs from a bounded integer range")]
#[command(
    long_about = "shortseq issues short string IDs from a bounded range of integers. \
Indices are walked either in ascending order or in a shuffled order that still \
visits every index exactly once before repeating, and each index is written \
in a configurable alphabet (digits, lowercase and uppercase letters by default)."
)]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Generator options shared by every command that builds a generator
#[derive(Args, Debug)]
struct OptionArgs {
    /// Smallest index (inclusive)
    #[arg(long)]
    min: Option<u64>,

    /// Largest index (inclusive)
    #[arg(long)]
    max: Option<u64>,

    /// Shortest ID length (overrides --min)
    #[arg(long)]
    min_length: Option<usize>,

    /// Longest ID length (overrides --max)
    #[arg(long)]
    max_length: Option<usize>,

    /// Symbol set used to write IDs
    #[arg(short, long)]
    alphabet: Option<String>,

    /// Shuffle the alphabet once
    #[arg(long, overrides_with = "no_shuffle")]
    shuffle: bool,

    /// Turn off --shuffle set by a config file
    #[arg(long, overrides_with = "shuffle")]
    no_shuffle: bool,

    /// Walk the range in full-period shuffled order
    #[arg(short, long, overrides_with = "no_random")]
    random: bool,

    /// Turn off --random set by a config file
    #[arg(long, overrides_with = "random")]
    no_random: bool,

    /// Pad every ID to the maximum length
    #[arg(short, long, overrides_with = "no_fixed_length")]
    fixed_length: bool,

    /// Turn off --fixed-length set by a config file
    #[arg(long, overrides_with = "fixed_length")]
    no_fixed_length: bool,

    /// Pad symbol
    #[arg(short, long)]
    prefix: Option<String>,

    /// Starting state of the shuffled order
    #[arg(short, long)]
    seed: Option<u64>,

    /// Read options from this TOML file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl OptionArgs {
    /// Splits into generator options and the options file path.
    /// An unset flag pair leaves the config file value in place.
    fn into_parts(self) -> (Options, Option<PathBuf>) {
        let options = Options {
            min: self.min,
            max: self.max,
            min_length: self.min_length,
            max_length: self.max_length,
            alphabet: self.alphabet,
            shuffle: switch(self.shuffle, self.no_shuffle),
            random: switch(self.random, self.no_random),
            fixed_length: switch(self.fixed_length, self.no_fixed_length),
            prefix: self.prefix,
            seed: self.seed,
        };
        (options, self.config)
    }
}

/// `--flag` wins as `Some(true)`, `--no-flag` as `Some(false)`.
fn switch(on: bool, off: bool) -> Option<bool> {
    if on {
        Some(true)
    } else if off {
        Some(false)
    } else {
        None
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate IDs
    #[command(
        long_about = "Generate IDs from a fresh generator, one per line.\n\n\
Every run starts a new cycle: sequential runs start at the minimum, random runs \
start at the position given by --seed (or a random one).",
        after_help = "Examples:\n  \
shortseq generate                           First ID (\"0\")\n  \
shortseq generate -n 10 --alphabet 01234    0 1 2 3 4 10 11 12 13 14\n  \
shortseq generate -n 3 --random --seed 42   Three shuffled IDs, reproducible\n  \
shortseq generate --min-length 3 --max-length 3 --random\n\n\
Output: One ID per line."
    )]
    Generate {
        /// Number of IDs to print
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        #[command(flatten)]
        options: OptionArgs,
    },

    /// Show resolved settings
    #[command(
        long_about = "Print the settings a generator would run with, as TOML.\n\n\
Includes derived bounds and lengths, the cycle length and, with --random, the \
LCG modulus, multiplier and increment."
    )]
    Inspect {
        #[command(flatten)]
        options: OptionArgs,
    },

    /// Decode IDs back to their indices
    #[command(
        after_help = "Examples:\n  \
shortseq decode 10 --alphabet 01234         5\n  \
shortseq decode __3 --prefix _ --alphabet 01234 --fixed-length --max 124\n\n\
Note: decoding needs the same alphabet that generated the IDs, so it is \
meaningless with --shuffle."
    )]
    Decode {
        /// IDs to decode
        #[arg(required = true)]
        ids: Vec<String>,

        #[command(flatten)]
        options: OptionArgs,
    },

    /// Create the global config file
    Setup,

    /// Print a shell completion script
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    init_logging();

    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { count, options } => {
            let (options, config) = options.into_parts();
            commands::generate(GenerateArgs {
                options,
                config,
                count,
            })
        }

        Commands::Inspect { options } => {
            let (options, config) = options.into_parts();
            commands::inspect(InspectArgs { options, config })
        }

        Commands::Decode { ids, options } => {
            let (options, config) = options.into_parts();
            commands::decode(DecodeArgs {
                ids,
                options,
                config,
            })
        }

        Commands::Setup => commands::setup(),

        Commands::Completions { shell } => commands::completions(shell, &mut Cli::command()),
    }
}
