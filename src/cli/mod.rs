// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the autosuggest command-line interface.
//!
//! Three subcommands: `query` answers one prefix, `interactive` answers one
//! prefix per stdin line until EOF, and `inspect` summarizes a term file.

pub mod display;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "autosuggest",
    about = "Weighted prefix autocomplete over a term file",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand that loads a term file.
#[derive(Args, Clone)]
pub struct LoadArgs {
    /// Term file: a count line then `<weight> <term>` lines, or a `.json` array
    pub file: String,

    /// Fail on malformed or missing lines instead of skipping them
    #[arg(long)]
    pub strict: bool,

    /// The file has no leading count line
    #[arg(long)]
    pub no_header: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every term starting with PREFIX, heaviest first
    Query {
        #[command(flatten)]
        load: LoadArgs,

        /// Prefix to complete (case-sensitive)
        prefix: String,

        /// Maximum number of suggestions to print (0 = all)
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Print suggestions as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Read prefixes from stdin, one per line, and print suggestions for each
    Interactive {
        #[command(flatten)]
        load: LoadArgs,

        /// Maximum number of suggestions per prefix (0 = all)
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Summarize a term file: entry count, weight range, first and last terms
    Inspect {
        #[command(flatten)]
        load: LoadArgs,
    },
}
