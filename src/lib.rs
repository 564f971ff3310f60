// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Multi-word string matching with an Aho-Corasick automaton.
//!
//! A dictionary is compiled once into a trie with failure links; a text is
//! then scanned in a single pass, counting every occurrence of every word,
//! overlaps and nested words included.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────┐     ┌──────────────┐     ┌───────────────┐
//! │ transitions.rs │────▶│   trie.rs    │────▶│  failure.rs   │
//! │ (hash or       │     │ (Trie: build │     │ (BFS links,   │
//! │  matrix goto)  │     │  phase)      │     │  WorkQueue)   │
//! └────────────────┘     └──────────────┘     └───────┬───────┘
//!                                                     ▼
//! ┌────────────────┐     ┌──────────────┐     ┌───────────────┐
//! │   report.rs    │◀────│ automaton.rs │────▶│  matcher.rs   │
//! │ (edge list,    │     │ (read-only,  │     │ (count, find, │
//! │  Graphviz)     │     │  Send+Sync)  │     │  is_match)    │
//! └────────────────┘     └──────┬───────┘     └───────────────┘
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │            verify/ + contracts.rs (invariant checks)         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! `source`, `generate` and `exact` feed the CLI and the benchmarks: source
//! file parsing, seeded random data, and single-word algorithms to compare
//! against.
//!
//! # Usage
//!
//! ```
//! use acmatch::Automaton;
//!
//! let ac = Automaton::from_words(["he", "she", "his", "hers"])?;
//! assert_eq!(ac.count_occurrences(b"ahishers"), 4);
//! # Ok::<(), acmatch::AcError>(())
//! ```

mod automaton;
pub mod contracts;
mod error;
mod exact;
mod failure;
pub mod generate;
mod matcher;
mod options;
mod queue;
pub mod report;
pub mod source;
mod transitions;
mod trie;
mod types;
pub mod verify;

pub use automaton::{Automaton, AutomatonStats};
pub use error::{AcError, Result};
pub use exact::ExactAlgorithm;
pub use failure::compute_failure_links;
pub use matcher::FindIter;
pub use options::{BuildOptions, StoreKind, DEFAULT_FILL_RATE, DEFAULT_MAX_NODES, MAX_FILL_RATE};
pub use queue::WorkQueue;
pub use transitions::TransitionStore;
pub use trie::Trie;
pub use types::{Edge, Match, NodeId, PatternId, TrieStats, ROOT};
pub use verify::InvariantError;
