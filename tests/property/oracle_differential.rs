//! Differential testing: the automaton against single-word oracles.

use std::collections::BTreeSet;

use super::oracles::{dictionary, oracle_find_all, text};
use acmatch::{Automaton, BuildOptions, Edge, ExactAlgorithm, StoreKind};
use proptest::prelude::*;

fn distinct(words: &[Vec<u8>]) -> BTreeSet<&[u8]> {
    words
        .iter()
        .map(Vec::as_slice)
        .filter(|w| !w.is_empty())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Automaton count equals the summed per-word counts of every algorithm.
    #[test]
    fn diff_count_vs_exact_algorithms(words in dictionary(), text in text()) {
        let ac = Automaton::from_words(&words).unwrap();
        let expected = ac.count_occurrences(&text);
        for algorithm in ExactAlgorithm::ALL {
            let total: usize = distinct(&words)
                .iter()
                .map(|w| algorithm.count(&text, w))
                .sum();
            prop_assert_eq!(total, expected, "{} disagrees", algorithm);
        }
    }

    /// Every reported match is a real occurrence, and none is missing.
    #[test]
    fn diff_matches_vs_window_oracle(words in dictionary(), text in text()) {
        let ac = Automaton::from_words(&words).unwrap();
        let mut found: Vec<(usize, usize)> =
            ac.find_iter(&text).map(|m| (m.start, m.end)).collect();
        found.sort_unstable();

        let mut expected: Vec<(usize, usize)> = distinct(&words)
            .iter()
            .flat_map(|w| oracle_find_all(&text, w).into_iter().map(move |s| (s, s + w.len())))
            .collect();
        expected.sort_unstable();

        prop_assert_eq!(found, expected);
    }

    /// Each exact algorithm matches the window oracle on its own.
    #[test]
    fn diff_exact_vs_window_oracle(
        word in super::oracles::symbols(0..8),
        text in text(),
    ) {
        let expected = oracle_find_all(&text, &word);
        for algorithm in ExactAlgorithm::ALL {
            prop_assert_eq!(algorithm.find_all(&text, &word), expected.clone(), "{}", algorithm);
        }
    }

    /// Hash and matrix layouts build the same automaton and count the same.
    #[test]
    fn diff_hash_store_vs_matrix_store(words in dictionary(), text in text()) {
        let total_len = words.iter().map(Vec::len).sum();
        let base = BuildOptions::for_total_len(total_len);
        let hashed = Automaton::with_options(&words, &base.with_store(StoreKind::Hash)).unwrap();
        let dense = Automaton::with_options(&words, &base.with_store(StoreKind::Matrix)).unwrap();

        prop_assert_eq!(hashed.node_count(), dense.node_count());
        let hashed_edges: Vec<Edge> = hashed.trie().edges().collect();
        let dense_edges: Vec<Edge> = dense.trie().edges().collect();
        prop_assert_eq!(hashed_edges, dense_edges);
        prop_assert_eq!(hashed.failure_links(), dense.failure_links());
        prop_assert_eq!(hashed.count_occurrences(&text), dense.count_occurrences(&text));
        prop_assert!(hashed.find_iter(&text).eq(dense.find_iter(&text)));
    }
}
