//! Scanning: counts, match positions, edge cases.

use super::common::{build, naive_count, naive_occurrences, CLASSIC};
use acmatch::{Automaton, Match};

#[test]
fn ahishers_scenario() {
    let ac = build(&CLASSIC);
    let text = b"ahishers";
    assert_eq!(ac.count_occurrences(text), 4);

    let words: Vec<&str> = ac
        .find_iter(text)
        .map(|m| CLASSIC[m.pattern])
        .collect();
    assert_eq!(words, vec!["his", "she", "he", "hers"]);

    let ends: Vec<usize> = ac.find_iter(text).map(|m| m.end - 1).collect();
    assert_eq!(ends, vec![3, 5, 5, 7]);
}

#[test]
fn matches_agree_with_window_scan() {
    let words = ["a", "ab", "bab", "bc", "bca", "c", "caa"];
    let text = b"abccab";
    let ac = build(&words);
    let mut found: Vec<(usize, usize)> =
        ac.find_iter(text).map(|m| (m.start, m.end)).collect();
    found.sort_unstable();
    assert_eq!(found, naive_occurrences(&words, text));
    assert_eq!(ac.count_occurrences(text), naive_count(&words, text));
}

#[test]
fn nested_words_all_report_at_one_position() {
    let ac = build(&["abcd", "bcd", "cd", "d"]);
    let at_end: Vec<Match> = ac.find_iter(b"xabcd").collect();
    assert_eq!(at_end.len(), 4);
    assert!(at_end.iter().all(|m| m.end == 5));
    // Longest first.
    let lens: Vec<usize> = at_end.iter().map(Match::len).collect();
    assert_eq!(lens, vec![4, 3, 2, 1]);
}

#[test]
fn no_dictionary_word_in_text() {
    let ac = build(&CLASSIC);
    assert_eq!(ac.count_occurrences(b"qqqqqqqqqqqq"), 0);
    assert!(!ac.is_match(b"qqqq"));
}

#[test]
fn empty_dictionary_and_empty_text() {
    let empty = build(&[]);
    assert_eq!(empty.count_occurrences(b"ahishers"), 0);
    let ac = build(&CLASSIC);
    assert_eq!(ac.count_occurrences(b""), 0);
    assert_eq!(ac.find_iter(b"").next(), None);
}

#[test]
fn empty_word_is_ignored_by_scans() {
    let with_empty = build(&["", "he"]);
    let without = build(&["he"]);
    for text in [&b""[..], b"h", b"hehe", b"xyz"] {
        assert_eq!(
            with_empty.count_occurrences(text),
            without.count_occurrences(text)
        );
    }
}

#[test]
fn duplicate_words_share_one_pattern() {
    let ac = build(&["ab", "cd", "ab"]);
    assert_eq!(ac.pattern_count(), 2);
    let patterns: Vec<usize> = ac.find_iter(b"abcdab").map(|m| m.pattern).collect();
    assert_eq!(patterns, vec![0, 1, 0]);
}

#[test]
fn non_ascii_bytes_scan() {
    let ac = Automaton::from_words(["é".as_bytes(), &[0xff, 0x00][..]]).unwrap();
    let mut text = "café".as_bytes().to_vec();
    text.extend_from_slice(&[0xff, 0x00, 0xff]);
    assert_eq!(ac.count_occurrences(&text), 2);
}

#[test]
fn long_periodic_text() {
    let ac = build(&["aa", "aaa"]);
    let text = vec![b'a'; 1000];
    // "aa" at 999 positions, "aaa" at 998
    assert_eq!(ac.count_occurrences(&text), 999 + 998);
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_counts_match_sequential() {
    let ac = build(&CLASSIC);
    let texts: Vec<Vec<u8>> = (0..64)
        .map(|i| "ahishers".repeat(i).into_bytes())
        .collect();
    let slices: Vec<&[u8]> = texts.iter().map(Vec::as_slice).collect();
    let counts = ac.count_many(&slices);
    for (i, count) in counts.into_iter().enumerate() {
        assert_eq!(count, 4 * i);
    }
}
