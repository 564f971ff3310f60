// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target: automaton scan against a window-by-window scan.
//!
//! Arbitrary byte dictionaries, stored as a matrix or as arbitrary (possibly
//! tiny) hash tables. The count, the match list and every single-word algorithm must
//! agree, and the built automaton must pass its structural checks.

#![no_main]

use std::collections::BTreeSet;

use acmatch::{verify, Automaton, BuildOptions, ExactAlgorithm, StoreKind};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct ScanInput {
    words: Vec<Vec<u8>>,
    text: Vec<u8>,
    max_nodes: u16,
    /// Fill rate in hundredths.
    fill_percent: u8,
    matrix: bool,
}

fuzz_target!(|input: ScanInput| {
    // Cap sizes to avoid timeouts
    let words: Vec<&[u8]> = input
        .words
        .iter()
        .take(32)
        .map(|w| &w[..w.len().min(16)])
        .collect();
    let text = &input.text[..input.text.len().min(1024)];
    let options = BuildOptions {
        max_nodes: usize::from(input.max_nodes).max(1),
        fill_rate: f64::from(input.fill_percent.max(1)) / 100.0,
        store: if input.matrix {
            StoreKind::Matrix
        } else {
            StoreKind::Hash
        },
    };

    let ac = Automaton::with_options(&words, &options).expect("valid options");
    verify::verify_automaton(&ac).expect("automaton well formed");

    let distinct: BTreeSet<&[u8]> = words.iter().copied().filter(|w| !w.is_empty()).collect();
    let mut expected: Vec<(usize, usize)> = distinct
        .iter()
        .flat_map(|w| {
            text.windows(w.len())
                .enumerate()
                .filter(move |(_, window)| window == w)
                .map(move |(start, _)| (start, start + w.len()))
        })
        .collect();
    expected.sort_unstable();

    let mut found: Vec<(usize, usize)> = ac.find_iter(text).map(|m| (m.start, m.end)).collect();
    found.sort_unstable();
    assert_eq!(found, expected);
    assert_eq!(ac.count_occurrences(text), expected.len());

    for algorithm in ExactAlgorithm::ALL {
        let total: usize = distinct.iter().map(|w| algorithm.count(text, w)).sum();
        assert_eq!(total, expected.len(), "{}", algorithm);
    }
});
