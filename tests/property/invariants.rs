//! Structural invariants of built automata.

use super::oracles::{dictionary, oracle_failure_path};
use acmatch::{verify, Automaton, NodeId, Trie, ROOT};
use proptest::prelude::*;

/// Path spelled from the root to every node.
fn paths(trie: &Trie) -> Vec<Vec<u8>> {
    let mut paths = vec![Vec::new(); trie.node_count()];
    for edge in trie.edges() {
        // Edges are grouped by source in id order; parents precede children.
        let mut path = paths[edge.source].clone();
        path.push(edge.symbol);
        paths[edge.target] = path;
    }
    paths
}

fn node_of(trie: &Trie, path: &[u8]) -> Option<NodeId> {
    path.iter().try_fold(ROOT, |n, &b| trie.lookup(n, b))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_verify_passes(words in dictionary()) {
        let ac = Automaton::from_words(&words).unwrap();
        prop_assert_eq!(verify::verify_automaton(&ac), Ok(()));
    }

    /// Each failure link names the longest proper suffix present in the trie.
    #[test]
    fn prop_failure_is_longest_suffix(words in dictionary()) {
        let ac = Automaton::from_words(&words).unwrap();
        let trie = ac.trie();
        let paths = paths(trie);
        for node in 1..trie.node_count() {
            let expected = oracle_failure_path(&paths[node], &words);
            prop_assert_eq!(Some(ac.failure(node)), node_of(trie, expected));
        }
    }

    /// Terminal nodes are exactly the inserted non-empty words.
    #[test]
    fn prop_terminals_are_words(words in dictionary()) {
        let trie = Trie::from_words(&words).unwrap();
        let paths = paths(&trie);
        for node in 1..trie.node_count() {
            prop_assert_eq!(trie.is_terminal(node), words.contains(&paths[node]));
        }
        let distinct: std::collections::BTreeSet<&Vec<u8>> = words.iter().collect();
        prop_assert_eq!(trie.pattern_count(), distinct.len());
    }

    /// Depth equals path length; failure targets are strictly shallower.
    #[test]
    fn prop_depths(words in dictionary()) {
        let ac = Automaton::from_words(&words).unwrap();
        let trie = ac.trie();
        let paths = paths(trie);
        for node in 0..trie.node_count() {
            prop_assert_eq!(trie.depth(node), paths[node].len());
            if node != ROOT {
                prop_assert!(trie.depth(ac.failure(node)) < trie.depth(node));
            }
        }
    }
}
