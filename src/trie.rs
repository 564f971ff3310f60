// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Trie construction: the build phase of the automaton.
//!
//! Each word becomes a path from the root; nodes are created lazily through
//! [`TransitionStore::insert_or_get`] and the last node of each word is
//! marked terminal. Node ids are handed out in creation order, so the same
//! ordered dictionary always yields the same numbering.
//!
//! ```text
//! insert "he", "she", "his", "hers"
//!
//!        h      e      r      s
//!   (0) ──▶ (1) ──▶ [2] ──▶ (8) ──▶ [9]
//!    │       │ i      s
//!    │       └────▶ (6) ──▶ [7]
//!    │ s      h      e
//!    └────▶ (3) ──▶ (4) ──▶ [5]
//!
//!   [n] = terminal
//! ```

use tracing::debug;

use crate::error::{AcError, Result};
use crate::options::BuildOptions;
use crate::transitions::TransitionStore;
use crate::types::{Edge, NodeId, PatternId, TrieStats, ROOT};

/// A dictionary under construction.
///
/// Turn it into a scanner with [`crate::compute_failure_links`].
#[derive(Debug, Clone)]
pub struct Trie {
    store: TransitionStore,
    terminal: Vec<Option<PatternId>>,
    depth: Vec<usize>,
    pattern_lens: Vec<usize>,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// An empty trie with a default-sized hash store.
    ///
    /// Allocates like any std collection; use [`Trie::with_options`] to get
    /// allocation failures back as [`AcError::OutOfMemory`].
    pub fn new() -> Self {
        Self {
            store: TransitionStore::new(),
            terminal: vec![None],
            depth: vec![0],
            pattern_lens: Vec::new(),
        }
    }

    pub fn with_options(options: &BuildOptions) -> Result<Self> {
        let store = TransitionStore::with_options(options)?;
        let mut trie = Self {
            store,
            terminal: Vec::new(),
            depth: Vec::new(),
            pattern_lens: Vec::new(),
        };
        trie.reserve_node()?;
        trie.push_node(0);
        Ok(trie)
    }

    /// Builds a trie from `words`, sizing the store from their total length.
    pub fn from_words<W: AsRef<[u8]>>(words: impl IntoIterator<Item = W>) -> Result<Self> {
        let words: Vec<W> = words.into_iter().collect();
        let total_len = words.iter().map(|w| w.as_ref().len()).sum();
        Self::from_words_with_options(words, &BuildOptions::for_total_len(total_len))
    }

    /// Builds a trie from `words` with an explicitly sized store.
    pub fn from_words_with_options<W: AsRef<[u8]>>(
        words: impl IntoIterator<Item = W>,
        options: &BuildOptions,
    ) -> Result<Self> {
        let words: Vec<W> = words.into_iter().collect();
        let mut trie = Self::with_options(options)?;
        for word in &words {
            trie.insert(word.as_ref())?;
        }
        debug!(
            words = words.len(),
            nodes = trie.node_count(),
            patterns = trie.pattern_count(),
            "trie built"
        );
        Ok(trie)
    }

    /// Adds `word` and marks its last node terminal.
    ///
    /// Inserting a word that is already present changes nothing. The empty
    /// word marks the root terminal.
    pub fn insert(&mut self, word: &[u8]) -> Result<()> {
        let node = self.walk_or_create(word, false)?;
        self.mark_terminal(node)
    }

    /// Adds every non-empty prefix of `word`.
    pub fn insert_prefixes(&mut self, word: &[u8]) -> Result<()> {
        self.walk_or_create(word, true).map(|_| ())
    }

    /// Adds every non-empty suffix of `word`.
    pub fn insert_suffixes(&mut self, word: &[u8]) -> Result<()> {
        for start in 0..word.len() {
            self.insert(&word[start..])?;
        }
        Ok(())
    }

    /// Adds every non-empty factor (substring) of `word`.
    pub fn insert_factors(&mut self, word: &[u8]) -> Result<()> {
        for start in 0..word.len() {
            self.insert_prefixes(&word[start..])?;
        }
        Ok(())
    }

    fn walk_or_create(&mut self, word: &[u8], mark_each: bool) -> Result<NodeId> {
        let mut node = ROOT;
        for &symbol in word {
            // Room for a new node before the store creates one, so a failed
            // allocation never leaves the store ahead of the node tables.
            self.reserve_node()?;
            let next = self.store.insert_or_get(node, symbol)?;
            if next == self.terminal.len() {
                self.push_node(self.depth[node] + 1);
            }
            node = next;
            if mark_each {
                self.mark_terminal(node)?;
            }
        }
        Ok(node)
    }

    fn reserve_node(&mut self) -> Result<()> {
        self.terminal
            .try_reserve(1)
            .map_err(AcError::out_of_memory("node table"))?;
        self.depth
            .try_reserve(1)
            .map_err(AcError::out_of_memory("node table"))
    }

    /// Appends a node row; callers reserve first.
    fn push_node(&mut self, depth: usize) {
        self.terminal.push(None);
        self.depth.push(depth);
    }

    fn mark_terminal(&mut self, node: NodeId) -> Result<()> {
        if self.terminal[node].is_some() {
            return Ok(());
        }
        self.pattern_lens
            .try_reserve(1)
            .map_err(AcError::out_of_memory("pattern table"))?;
        self.terminal[node] = Some(self.pattern_lens.len());
        self.pattern_lens.push(self.depth[node]);
        Ok(())
    }

    /// Follows explicit transitions only.
    fn walk(&self, word: &[u8]) -> Option<NodeId> {
        word.iter()
            .try_fold(ROOT, |node, &symbol| self.store.lookup(node, symbol))
    }

    /// True if `word` was inserted.
    pub fn contains(&self, word: &[u8]) -> bool {
        self.walk(word).is_some_and(|n| self.is_terminal(n))
    }

    /// True if `prefix` spells a path from the root.
    pub fn contains_prefix(&self, prefix: &[u8]) -> bool {
        self.walk(prefix).is_some()
    }

    /// Pattern id of `word`, if it was inserted.
    pub fn pattern_id(&self, word: &[u8]) -> Option<PatternId> {
        self.walk(word).and_then(|n| self.terminal[n])
    }

    #[inline]
    pub fn lookup(&self, node: NodeId, symbol: u8) -> Option<NodeId> {
        self.store.lookup(node, symbol)
    }

    pub fn children(&self, node: NodeId) -> impl Iterator<Item = (u8, NodeId)> + '_ {
        self.store.outgoing(node)
    }

    #[inline]
    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.terminal.get(node).is_some_and(Option::is_some)
    }

    /// Pattern ending at `node`, if any.
    #[inline]
    pub fn pattern_at(&self, node: NodeId) -> Option<PatternId> {
        self.terminal.get(node).copied().flatten()
    }

    /// Length of the root-to-node path.
    ///
    /// # Panics
    ///
    /// If `node` is not a node of this trie (`node >= node_count()`).
    #[inline]
    pub fn depth(&self, node: NodeId) -> usize {
        self.depth[node]
    }

    /// Length in bytes of a pattern.
    pub fn pattern_len(&self, pattern: PatternId) -> Option<usize> {
        self.pattern_lens.get(pattern).copied()
    }

    pub fn node_count(&self) -> usize {
        self.terminal.len()
    }

    pub fn transition_count(&self) -> usize {
        self.store.transition_count()
    }

    /// Number of distinct inserted words.
    pub fn pattern_count(&self) -> usize {
        self.pattern_lens.len()
    }

    /// Every explicit transition, grouped by source node in id order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.node_count()).flat_map(move |source| {
            self.store.outgoing(source).map(move |(symbol, target)| Edge {
                source,
                target,
                symbol,
                terminal: self.is_terminal(target),
            })
        })
    }

    pub fn stats(&self) -> TrieStats {
        TrieStats {
            nodes: self.node_count(),
            transitions: self.transition_count(),
            patterns: self.pattern_count(),
            max_depth: self.depth.iter().copied().max().unwrap_or(0),
            store: self.store.kind(),
            buckets: self.store.bucket_count(),
            longest_chain: self.store.longest_chain(),
        }
    }

    pub(crate) fn store(&self) -> &TransitionStore {
        &self.store
    }
}
