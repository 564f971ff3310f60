// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core value types shared by the trie, the automaton and the reports.

use serde::{Deserialize, Serialize};

use crate::options::StoreKind;

/// Index of a node in the trie's node table.
pub type NodeId = usize;

/// Dense id of a distinct dictionary word, in first-insertion order.
pub type PatternId = usize;

/// The root node. It always exists and is its own failure link.
pub const ROOT: NodeId = 0;

/// One occurrence of a dictionary word in a scanned text.
///
/// `start..end` is a half-open byte range, so `end - 1` is the index of the
/// last matched byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Match {
    pub pattern: PatternId,
    pub start: usize,
    pub end: usize,
}

impl Match {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false: the empty word never produces a match.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// An explicit trie transition, as reported by [`crate::Trie::edges`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    pub symbol: u8,
    /// Whether `target` ends a dictionary word.
    pub terminal: bool,
}

/// Size and shape of a built trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrieStats {
    pub nodes: usize,
    pub transitions: usize,
    pub patterns: usize,
    pub max_depth: usize,
    pub store: StoreKind,
    pub buckets: usize,
    pub longest_chain: usize,
}
