// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scanning a text with a compiled automaton.
//!
//! One pass, one state. For each byte the scan takes the explicit transition
//! if there is one, otherwise it falls back along failure links until a
//! transition exists or the root absorbs the byte:
//!
//! ```text
//! dictionary {he, she, his, hers}, text "ahishers"
//!
//! i  byte  state        words ending here
//! ─  ────  ───────────  ─────────────────
//! 0  a     root
//! 1  h     h
//! 2  i     hi
//! 3  s     his          his
//! 4  h     sh
//! 5  e     she          she, he
//! 6  r     her
//! 7  s     hers         hers
//!                       ───────────────── 4
//! ```
//!
//! Every terminal node on the failure chain of the reached state ends a word
//! at that position. Counting reads the precomputed chain total; listing
//! walks the output links, longest word first.

use tracing::debug;

use crate::automaton::Automaton;
use crate::contracts;
use crate::types::{Match, NodeId, ROOT};

impl Automaton {
    /// The goto function: state after reading `byte` in `state`.
    #[inline]
    pub fn next_state(&self, mut state: NodeId, byte: u8) -> NodeId {
        contracts::check_state_in_range(self, state);
        loop {
            if let Some(next) = self.trie.lookup(state, byte) {
                return next;
            }
            if state == ROOT {
                return ROOT;
            }
            state = self.failure(state);
        }
    }

    /// Number of dictionary-word occurrences in `text`, overlaps included.
    ///
    /// A word occurring at several positions counts once per position; words
    /// that are suffixes of each other all count at a shared end position.
    pub fn count_occurrences(&self, text: &[u8]) -> usize {
        let mut state = ROOT;
        let mut count = 0;
        for &byte in text {
            state = self.next_state(state, byte);
            count += self.output_count(state);
        }
        debug!(text_len = text.len(), count, "scan complete");
        count
    }

    /// Iterates over every occurrence in `text`, ordered by end position and
    /// then longest word first.
    pub fn find_iter<'a>(&'a self, text: &'a [u8]) -> FindIter<'a> {
        FindIter {
            ac: self,
            text,
            pos: 0,
            state: ROOT,
            pending: None,
        }
    }

    /// True if any dictionary word occurs in `text`. Stops at the first hit.
    pub fn is_match(&self, text: &[u8]) -> bool {
        let mut state = ROOT;
        text.iter().any(|&byte| {
            state = self.next_state(state, byte);
            self.output_count(state) > 0
        })
    }

    /// Counts occurrences in each text, sharing this automaton across threads.
    #[cfg(feature = "parallel")]
    pub fn count_many(&self, texts: &[&[u8]]) -> Vec<usize> {
        use rayon::prelude::*;

        texts
            .par_iter()
            .map(|text| self.count_occurrences(text))
            .collect()
    }

    fn first_output(&self, state: NodeId) -> Option<NodeId> {
        if state != ROOT && self.trie.is_terminal(state) {
            Some(state)
        } else {
            self.output_link(state)
        }
    }
}

/// Iterator over the matches of one scan. See [`Automaton::find_iter`].
#[derive(Debug, Clone)]
pub struct FindIter<'a> {
    ac: &'a Automaton,
    text: &'a [u8],
    /// Bytes consumed so far.
    pos: usize,
    state: NodeId,
    /// Next terminal node to report at `pos`.
    pending: Option<NodeId>,
}

impl Iterator for FindIter<'_> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        loop {
            if let Some(node) = self.pending {
                self.pending = self.ac.output_link(node);
                let Some(pattern) = self.ac.trie.pattern_at(node) else {
                    continue;
                };
                let end = self.pos;
                let m = Match {
                    pattern,
                    start: end - self.ac.trie.depth(node),
                    end,
                };
                contracts::check_match_well_formed(self.ac, &m, self.text.len());
                return Some(m);
            }

            let &byte = self.text.get(self.pos)?;
            self.state = self.ac.next_state(self.state, byte);
            self.pos += 1;
            self.pending = self.ac.first_output(self.state);
        }
    }
}
