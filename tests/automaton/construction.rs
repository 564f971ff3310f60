//! Trie construction: numbering, sizing, insertion modes.

use super::common::{build, CLASSIC};
use acmatch::{AcError, Automaton, BuildOptions, Edge, StoreKind, Trie, ROOT};

#[test]
fn classic_dictionary_shape() {
    let ac = build(&CLASSIC);
    let stats = ac.stats();
    assert_eq!(stats.trie.nodes, 10);
    assert_eq!(stats.trie.transitions, 9);
    assert_eq!(stats.trie.patterns, 4);
    assert_eq!(stats.trie.max_depth, 4);
    // "hers" ends in "s"; "she" ends in "he"
    assert_eq!(stats.max_outputs_per_position, 2);
}

#[test]
fn same_dictionary_same_numbering() {
    let a: Vec<Edge> = Trie::from_words(CLASSIC).unwrap().edges().collect();
    let b: Vec<Edge> = Trie::from_words(CLASSIC).unwrap().edges().collect();
    assert_eq!(a, b);
}

#[test]
fn order_changes_numbering_not_language() {
    let forward = Trie::from_words(["ab", "b"]).unwrap();
    let backward = Trie::from_words(["b", "ab"]).unwrap();
    assert_eq!(forward.lookup(ROOT, b'a'), Some(1));
    assert_eq!(backward.lookup(ROOT, b'b'), Some(1));
    for w in ["ab", "b"] {
        assert!(forward.contains(w.as_bytes()));
        assert!(backward.contains(w.as_bytes()));
    }
}

#[test]
fn tiny_hash_table_still_builds() {
    // Every transition lands in the single bucket.
    let options = BuildOptions {
        max_nodes: 1,
        fill_rate: 0.01,
        ..BuildOptions::default()
    };
    let trie = Trie::from_words_with_options(CLASSIC, &options).unwrap();
    let stats = trie.stats();
    assert_eq!(stats.buckets, 1);
    assert_eq!(stats.longest_chain, 9);
    assert!(CLASSIC.iter().all(|w| trie.contains(w.as_bytes())));
}

#[test]
fn invalid_fill_rate_is_rejected() {
    for fill_rate in [0.0, -1.0, f64::NAN, f64::INFINITY, 1e300] {
        let options = BuildOptions {
            max_nodes: 10,
            fill_rate,
            ..BuildOptions::default()
        };
        assert!(
            matches!(Trie::with_options(&options), Err(AcError::InvalidOptions { .. })),
            "accepted {}",
            fill_rate
        );
    }
}

#[test]
fn every_byte_value_is_a_symbol() {
    let word: Vec<u8> = (0..=255).collect();
    let trie = Trie::from_words([&word]).unwrap();
    assert_eq!(trie.node_count(), 257);
    assert!(trie.contains(&word));
    assert!(!trie.contains(&word[1..]));
}

#[test]
fn factor_trie_recognizes_every_substring() {
    let word = b"abracadabra";
    let mut trie = Trie::new();
    trie.insert_factors(word).unwrap();
    for start in 0..word.len() {
        for end in start + 1..=word.len() {
            assert!(trie.contains(&word[start..end]));
        }
    }
    assert!(!trie.contains(b"abrr"));
}

#[test]
fn huge_fill_rate_is_invalid_not_out_of_memory() {
    let options = BuildOptions {
        max_nodes: 10,
        fill_rate: 1e300,
        ..BuildOptions::default()
    };
    let err = Automaton::with_options(["ab"], &options).unwrap_err();
    assert!(matches!(err, AcError::InvalidOptions { .. }), "{}", err);
}

#[test]
fn matrix_store_matches_hash_store() {
    let hashed = build(&CLASSIC);
    let options = BuildOptions::default().with_store(StoreKind::Matrix);
    let dense = Automaton::with_options(CLASSIC, &options).unwrap();
    assert_eq!(dense.stats().trie.store, StoreKind::Matrix);
    assert_eq!(dense.node_count(), hashed.node_count());
    assert_eq!(dense.failure_links(), hashed.failure_links());
    assert_eq!(dense.count_occurrences(b"ahishers"), 4);
}
