// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The compiled automaton: a trie plus its failure and output links.
//!
//! An `Automaton` only comes out of [`crate::compute_failure_links`], so
//! every value of this type has finished links and is read-only. It owns
//! plain `Vec`s and is `Send + Sync`; share it by reference to scan several
//! texts at once.

use serde::Serialize;

use crate::error::Result;
use crate::failure::compute_failure_links;
use crate::options::BuildOptions;
use crate::trie::Trie;
use crate::types::{NodeId, PatternId, TrieStats};

#[derive(Debug, Clone)]
pub struct Automaton {
    pub(crate) trie: Trie,
    pub(crate) failure: Vec<NodeId>,
    /// Nearest proper suffix on the failure chain that ends a word.
    pub(crate) output_link: Vec<Option<NodeId>>,
    /// Words ending at a node, counting its whole failure chain.
    pub(crate) output_count: Vec<usize>,
}

/// Shape of a compiled automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomatonStats {
    #[serde(flatten)]
    pub trie: TrieStats,
    /// Most words that can end at a single text position.
    pub max_outputs_per_position: usize,
}

impl Automaton {
    /// Builds the trie for `words` and links it.
    pub fn from_words<W: AsRef<[u8]>>(words: impl IntoIterator<Item = W>) -> Result<Self> {
        compute_failure_links(Trie::from_words(words)?)
    }

    /// Builds and links with an explicitly sized transition store.
    pub fn with_options<W: AsRef<[u8]>>(
        words: impl IntoIterator<Item = W>,
        options: &BuildOptions,
    ) -> Result<Self> {
        compute_failure_links(Trie::from_words_with_options(words, options)?)
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Gives the trie back, dropping the links.
    pub fn into_trie(self) -> Trie {
        self.trie
    }

    /// Failure link of `node`. The root links to itself.
    #[inline]
    pub fn failure(&self, node: NodeId) -> NodeId {
        self.failure[node]
    }

    /// Failure links indexed by node id.
    pub fn failure_links(&self) -> &[NodeId] {
        &self.failure
    }

    #[inline]
    pub fn output_link(&self, node: NodeId) -> Option<NodeId> {
        self.output_link[node]
    }

    /// Number of words that end when the scan reaches `node`.
    #[inline]
    pub fn output_count(&self, node: NodeId) -> usize {
        self.output_count[node]
    }

    pub fn node_count(&self) -> usize {
        self.trie.node_count()
    }

    pub fn pattern_count(&self) -> usize {
        self.trie.pattern_count()
    }

    pub fn pattern_len(&self, pattern: PatternId) -> Option<usize> {
        self.trie.pattern_len(pattern)
    }

    pub fn stats(&self) -> AutomatonStats {
        AutomatonStats {
            trie: self.trie.stats(),
            max_outputs_per_position: self.output_count.iter().copied().max().unwrap_or(0),
        }
    }
}
