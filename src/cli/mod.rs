// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the acmatch command-line interface.
//!
//! `count` and `matches` scan a text against a dictionary, `dot` draws the
//! automaton, `generate` writes random sources, and `bench` races the
//! automaton against the single-word algorithms on the same data.

pub mod display;

use std::path::PathBuf;

use acmatch::{BuildOptions, StoreKind, DEFAULT_FILL_RATE};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "acmatch",
    about = "Count dictionary-word occurrences with an Aho-Corasick automaton",
    version
)]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug). ACMATCH_LOG overrides.
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Transition store layout and sizing, shared by the commands that build an
/// automaton.
#[derive(Args, Debug, Clone, Copy)]
pub struct SizingArgs {
    /// Node count the hash table is sized for (a hint, not a cap)
    #[arg(long, env = "ACMATCH_MAX_NODES")]
    pub max_nodes: Option<usize>,

    /// Buckets per expected node
    #[arg(long, env = "ACMATCH_FILL_RATE", default_value_t = DEFAULT_FILL_RATE)]
    pub fill_rate: f64,

    /// Transition layout: hash (chained buckets) or matrix (256 targets per node)
    #[arg(long, env = "ACMATCH_STORE", default_value_t = StoreKind::Hash)]
    pub store: StoreKind,
}

impl SizingArgs {
    /// Options for a dictionary whose words total `total_len` bytes.
    pub fn options(&self, total_len: usize) -> BuildOptions {
        let mut options = BuildOptions::for_total_len(total_len);
        if let Some(max_nodes) = self.max_nodes {
            options.max_nodes = max_nodes;
        }
        options.fill_rate = self.fill_rate;
        options.store = self.store;
        options
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count occurrences of the dictionary words in a text
    Count {
        /// Dictionary file: a word count followed by that many words
        dict: PathBuf,

        /// Text file: its first whitespace-delimited token is scanned
        text: PathBuf,

        /// Also dump every trie transition
        #[arg(long)]
        verbose: bool,

        /// Print a JSON report instead of the bare count
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        sizing: SizingArgs,
    },

    /// List every occurrence with its position
    Matches {
        dict: PathBuf,

        text: PathBuf,

        /// Stop after this many matches
        #[arg(short, long)]
        limit: Option<usize>,

        #[command(flatten)]
        sizing: SizingArgs,
    },

    /// Print the automaton as a Graphviz digraph
    Dot {
        dict: PathBuf,

        /// Leave out failure links
        #[arg(long)]
        no_failure: bool,

        /// Also draw failure links that point to the root
        #[arg(long, conflicts_with = "no_failure")]
        root_failure: bool,
    },

    /// Write a random dictionary or text to stdout
    Generate {
        #[command(subcommand)]
        kind: GenerateKind,
    },

    /// Time both automaton layouts against every single-word algorithm
    Bench {
        /// Dictionary file (generated when omitted)
        #[arg(long, requires = "text")]
        dict: Option<PathBuf>,

        /// Text file (generated when omitted)
        #[arg(long, requires = "dict")]
        text: Option<PathBuf>,

        /// Generated dictionary size
        #[arg(long, default_value = "100")]
        words: usize,

        #[arg(long, default_value = "5")]
        min_len: usize,

        #[arg(long, default_value = "15")]
        max_len: usize,

        /// Generated text length
        #[arg(long, default_value = "500000")]
        text_len: usize,

        /// Alphabet size for generated data (1-94)
        #[arg(long, default_value = "4")]
        alphabet: usize,

        /// Seed for generated data
        #[arg(long, default_value = "1")]
        seed: u64,

        /// Timed runs per algorithm; the fastest is reported
        #[arg(long, default_value = "3")]
        runs: usize,

        #[command(flatten)]
        sizing: SizingArgs,
    },
}

#[derive(Subcommand)]
pub enum GenerateKind {
    /// A dictionary: COUNT words of MIN..=MAX symbols
    Words {
        count: usize,
        min_len: usize,
        max_len: usize,
        /// Alphabet size (1-94)
        alphabet: usize,
        #[arg(long)]
        seed: Option<u64>,
    },

    /// A text of LEN symbols
    Text {
        len: usize,
        /// Alphabet size (1-94)
        alphabet: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
}
