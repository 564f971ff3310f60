// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Single-word search algorithms.
//!
//! Baselines for the automaton: scanning a text once per word with any of
//! these gives the same total as one automaton scan over the dictionary.
//! The `bench` command and the differential tests rely on that.
//!
//! | Algorithm            | Preprocessing      | Worst case  |
//! |----------------------|--------------------|-------------|
//! | `Naive`              | none               | O(n·m)      |
//! | `NaiveFastLoop`      | none               | O(n·m)      |
//! | `NaiveSentinel`      | copy of the text   | O(n·m)      |
//! | `MorrisPratt`        | borders, O(m)      | O(n + m)    |
//! | `KnuthMorrisPratt`   | strict borders     | O(n + m)    |
//! | `BoyerMoore`         | bad char + good suffix | O(n·m)  |
//!
//! All of them report every occurrence, overlapping ones included. The
//! empty word has no occurrences.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExactAlgorithm {
    Naive,
    /// Naive, but compares the last byte before the rest.
    NaiveFastLoop,
    /// Fast loop that skips to candidates over a sentinel-terminated copy.
    NaiveSentinel,
    MorrisPratt,
    KnuthMorrisPratt,
    BoyerMoore,
}

impl ExactAlgorithm {
    pub const ALL: [ExactAlgorithm; 6] = [
        ExactAlgorithm::Naive,
        ExactAlgorithm::NaiveFastLoop,
        ExactAlgorithm::NaiveSentinel,
        ExactAlgorithm::MorrisPratt,
        ExactAlgorithm::KnuthMorrisPratt,
        ExactAlgorithm::BoyerMoore,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ExactAlgorithm::Naive => "naive",
            ExactAlgorithm::NaiveFastLoop => "naive-fast-loop",
            ExactAlgorithm::NaiveSentinel => "naive-sentinel",
            ExactAlgorithm::MorrisPratt => "morris-pratt",
            ExactAlgorithm::KnuthMorrisPratt => "knuth-morris-pratt",
            ExactAlgorithm::BoyerMoore => "boyer-moore",
        }
    }

    /// Start positions of every occurrence of `word` in `text`, ascending.
    pub fn find_all(self, text: &[u8], word: &[u8]) -> Vec<usize> {
        if word.is_empty() || word.len() > text.len() {
            return Vec::new();
        }
        match self {
            ExactAlgorithm::Naive => naive(text, word),
            ExactAlgorithm::NaiveFastLoop => naive_fast_loop(text, word),
            ExactAlgorithm::NaiveSentinel => naive_sentinel(text, word),
            ExactAlgorithm::MorrisPratt => border_search(text, word, &mp_table(word)),
            ExactAlgorithm::KnuthMorrisPratt => border_search(text, word, &kmp_table(word)),
            ExactAlgorithm::BoyerMoore => boyer_moore(text, word),
        }
    }

    pub fn count(self, text: &[u8], word: &[u8]) -> usize {
        self.find_all(text, word).len()
    }
}

impl fmt::Display for ExactAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExactAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExactAlgorithm::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = ExactAlgorithm::ALL.iter().map(|a| a.name()).collect();
                format!("unknown algorithm '{}' (expected one of: {})", s, names.join(", "))
            })
    }
}

// ============================================================================
// NAIVE FAMILY
// ============================================================================

fn naive(text: &[u8], word: &[u8]) -> Vec<usize> {
    let m = word.len();
    (0..=text.len() - m)
        .filter(|&i| (0..m).all(|j| text[i + j] == word[j]))
        .collect()
}

fn naive_fast_loop(text: &[u8], word: &[u8]) -> Vec<usize> {
    let m = word.len();
    let last = word[m - 1];
    (0..=text.len() - m)
        .filter(|&i| text[i + m - 1] == last && text[i..i + m - 1] == word[..m - 1])
        .collect()
}

fn naive_sentinel(text: &[u8], word: &[u8]) -> Vec<usize> {
    let (n, m) = (text.len(), word.len());
    let last = word[m - 1];
    let mut buf = Vec::with_capacity(n + 1);
    buf.extend_from_slice(text);
    buf.push(last);

    let mut found = Vec::new();
    let mut i = 0;
    loop {
        // Always stops: buf[n] is the sentinel.
        while buf[i + m - 1] != last {
            i += 1;
        }
        if i > n - m {
            break;
        }
        if buf[i..i + m - 1] == word[..m - 1] {
            found.push(i);
        }
        i += 1;
    }
    found
}

// ============================================================================
// BORDER-BASED (MORRIS-PRATT, KNUTH-MORRIS-PRATT)
// ============================================================================

/// `table[i]` is the length of the longest proper border of `word[..i]`;
/// `table[0]` is -1.
fn mp_table(word: &[u8]) -> Vec<isize> {
    let m = word.len();
    let mut table = vec![-1isize; m + 1];
    let mut k: isize = -1;
    for i in 0..m {
        while k >= 0 && word[k as usize] != word[i] {
            k = table[k as usize];
        }
        k += 1;
        table[i + 1] = k;
    }
    table
}

/// Like [`mp_table`], skipping borders followed by the same byte as the
/// prefix they fall back from.
fn kmp_table(word: &[u8]) -> Vec<isize> {
    let m = word.len();
    let mut table = vec![-1isize; m + 1];
    let mut k: isize = -1;
    for i in 0..m {
        while k >= 0 && word[k as usize] != word[i] {
            k = table[k as usize];
        }
        k += 1;
        let next = i + 1;
        table[next] = if next < m && word[next] == word[k as usize] {
            table[k as usize]
        } else {
            k
        };
    }
    table
}

fn border_search(text: &[u8], word: &[u8], table: &[isize]) -> Vec<usize> {
    let m = word.len();
    let mut found = Vec::new();
    let mut j: isize = 0;
    for (i, &byte) in text.iter().enumerate() {
        while j >= 0 && word[j as usize] != byte {
            j = table[j as usize];
        }
        j += 1;
        if j as usize == m {
            found.push(i + 1 - m);
            j = table[m];
        }
    }
    found
}

// ============================================================================
// BOYER-MOORE
// ============================================================================

/// Distance from the last occurrence of each byte in `word[..m-1]` to the
/// end of the word; `m` for absent bytes.
fn bad_character(word: &[u8]) -> [usize; 256] {
    let m = word.len();
    let mut table = [m; 256];
    for (i, &b) in word[..m - 1].iter().enumerate() {
        table[b as usize] = m - 1 - i;
    }
    table
}

/// `suffix[i]`: longest common suffix of `word[..=i]` and `word`.
fn suffix_lengths(word: &[u8]) -> Vec<usize> {
    let m = word.len();
    (0..m)
        .map(|i| (0..=i).take_while(|&k| word[i - k] == word[m - 1 - k]).count())
        .collect()
}

fn good_suffix(word: &[u8]) -> Vec<usize> {
    let m = word.len();
    let suffix = suffix_lengths(word);
    let mut table = vec![m; m];

    let mut j = 0;
    for i in (0..m).rev() {
        if suffix[i] == i + 1 {
            while j < m - 1 - i {
                if table[j] == m {
                    table[j] = m - 1 - i;
                }
                j += 1;
            }
        }
    }
    for i in 0..m - 1 {
        table[m - 1 - suffix[i]] = m - 1 - i;
    }
    table
}

fn boyer_moore(text: &[u8], word: &[u8]) -> Vec<usize> {
    let (n, m) = (text.len(), word.len());
    let bad = bad_character(word);
    let good = good_suffix(word);

    let mut found = Vec::new();
    let mut j = 0;
    while j + m <= n {
        // Unmatched prefix length, compared right to left.
        let mut i = m;
        while i > 0 && word[i - 1] == text[j + i - 1] {
            i -= 1;
        }
        if i == 0 {
            found.push(j);
            j += good[0];
        } else {
            let k = i - 1;
            let bad_shift = bad[text[j + k] as usize] as isize - (m - 1 - k) as isize;
            j += (good[k] as isize).max(bad_shift) as usize;
        }
    }
    found
}
