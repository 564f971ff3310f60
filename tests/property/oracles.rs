//! Reference oracles and strategies for differential testing.
//!
//! Simple, obviously-correct implementations. If an optimized algorithm
//! disagrees with one of these, the oracle is right.

use proptest::prelude::*;

// =============================================================================
// ORACLE IMPLEMENTATIONS
// =============================================================================

/// Start positions of `word` in `text` by comparing every window.
pub fn oracle_find_all(text: &[u8], word: &[u8]) -> Vec<usize> {
    if word.is_empty() {
        return Vec::new();
    }
    text.windows(word.len())
        .enumerate()
        .filter(|(_, w)| *w == word)
        .map(|(i, _)| i)
        .collect()
}

/// Longest proper suffix of `path` that is a prefix of some word.
pub fn oracle_failure_path<'a>(path: &'a [u8], words: &[Vec<u8>]) -> &'a [u8] {
    (1..=path.len())
        .map(|start| &path[start..])
        .find(|suffix| words.iter().any(|w| w.starts_with(suffix)))
        .unwrap_or(&[])
}

// =============================================================================
// STRATEGIES
// =============================================================================

/// Bytes from a three-letter alphabet.
pub fn symbols(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(b"abc".to_vec()), len)
}

/// Dictionaries with short, frequently overlapping words (empty ones included).
pub fn dictionary() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(symbols(0..6), 0..12)
}

pub fn text() -> impl Strategy<Value = Vec<u8>> {
    symbols(0..200)
}

#[test]
fn oracle_sanity() {
    assert_eq!(oracle_find_all(b"aaaa", b"aa"), vec![0, 1, 2]);
    let words = vec![b"he".to_vec(), b"she".to_vec()];
    assert_eq!(oracle_failure_path(b"she", &words), b"he");
    assert_eq!(oracle_failure_path(b"he", &words), b"");
}
