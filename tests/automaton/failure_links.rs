//! Failure and output links on hand-checked dictionaries.

use super::common::{build, node, CLASSIC};
use acmatch::{compute_failure_links, verify, Trie, ROOT};

#[test]
fn classic_failure_table() {
    let ac = build(&CLASSIC);
    for (path, expected) in [
        ("h", ""),
        ("he", ""),
        ("s", ""),
        ("sh", "h"),
        ("she", "he"),
        ("hi", ""),
        ("his", "s"),
        ("her", ""),
        ("hers", "s"),
    ] {
        assert_eq!(
            ac.failure(node(&ac, path)),
            node(&ac, expected),
            "failure({})",
            path
        );
    }
}

#[test]
fn output_links_point_at_nearest_terminal_suffix() {
    let ac = build(&CLASSIC);
    assert_eq!(ac.output_link(node(&ac, "she")), Some(node(&ac, "he")));
    assert_eq!(ac.output_link(node(&ac, "hers")), None);
    assert_eq!(ac.output_count(node(&ac, "she")), 2);
    assert_eq!(ac.output_count(node(&ac, "his")), 1);
    assert_eq!(ac.output_count(ROOT), 0);
}

#[test]
fn links_from_a_hand_built_trie() {
    let mut trie = Trie::new();
    trie.insert(b"abab").unwrap();
    trie.insert_suffixes(b"bab").unwrap();
    let ac = compute_failure_links(trie).unwrap();
    assert_eq!(ac.failure(node(&ac, "abab")), node(&ac, "bab"));
    assert_eq!(ac.failure(node(&ac, "bab")), node(&ac, "ab"));
    assert_eq!(verify::verify_automaton(&ac), Ok(()));
}

#[test]
fn empty_dictionary_is_a_lone_root() {
    let ac = build(&[]);
    assert_eq!(ac.node_count(), 1);
    assert_eq!(ac.failure_links(), &[ROOT]);
    assert_eq!(ac.output_count(ROOT), 0);
}

#[test]
fn links_survive_collision_heavy_tables() {
    let words = ["abc", "bcd", "cde", "dea", "eab"];
    let options = acmatch::BuildOptions {
        max_nodes: 2,
        fill_rate: 0.5,
        ..acmatch::BuildOptions::default()
    };
    let small = acmatch::Automaton::with_options(words, &options).unwrap();
    let roomy = build(&words);
    assert_eq!(small.failure_links(), roomy.failure_links());
    assert_eq!(verify::verify_automaton(&small), Ok(()));
}
