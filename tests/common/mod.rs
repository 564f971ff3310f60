//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::collections::BTreeSet;
use std::io::Write;

use acmatch::{Automaton, NodeId, ROOT};

// ============================================================================
// FIXTURES
// ============================================================================

/// The textbook dictionary.
pub const CLASSIC: [&str; 4] = ["he", "she", "his", "hers"];

pub fn build(words: &[&str]) -> Automaton {
    Automaton::from_words(words).expect("automaton should build")
}

/// Node reached by following `path` over explicit transitions.
pub fn node(ac: &Automaton, path: &str) -> NodeId {
    path.bytes()
        .try_fold(ROOT, |n, b| ac.trie().lookup(n, b))
        .unwrap_or_else(|| panic!("no trie path {:?}", path))
}

/// Writes `contents` to a fresh temporary file.
pub fn temp_file(contents: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents).expect("Failed to write temp file");
    file
}

// ============================================================================
// NAIVE ORACLE
// ============================================================================

/// Every `(start, end)` occurrence of any distinct non-empty word, by window
/// comparison.
pub fn naive_occurrences<W: AsRef<[u8]>>(words: &[W], text: &[u8]) -> Vec<(usize, usize)> {
    let distinct: BTreeSet<&[u8]> = words
        .iter()
        .map(AsRef::as_ref)
        .filter(|w| !w.is_empty())
        .collect();
    let mut found: Vec<(usize, usize)> = distinct
        .iter()
        .flat_map(|w| {
            text.windows(w.len())
                .enumerate()
                .filter(move |(_, window)| window == w)
                .map(move |(start, _)| (start, start + w.len()))
        })
        .collect();
    found.sort_unstable();
    found
}

pub fn naive_count<W: AsRef<[u8]>>(words: &[W], text: &[u8]) -> usize {
    naive_occurrences(words, text).len()
}
