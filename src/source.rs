// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Dictionary and text sources.
//!
//! ```text
//! dictionary file          text file
//! ───────────────          ─────────
//! 4                        ahishers
//! he she
//! his
//! hers
//! ```
//!
//! A dictionary is a decimal word count followed by exactly that many words.
//! Words and the text are whitespace-delimited byte strings; only the first
//! token of a text source is scanned.

use std::fs;
use std::path::Path;

use crate::error::{AcError, Result};

fn tokens(bytes: &[u8]) -> impl Iterator<Item = &[u8]> {
    bytes
        .split(|b| b.is_ascii_whitespace())
        .filter(|t| !t.is_empty())
}

/// Parses a dictionary source into its words, in order.
pub fn parse_dictionary(bytes: &[u8]) -> Result<Vec<Vec<u8>>> {
    let mut tokens = tokens(bytes);
    let count_token = tokens
        .next()
        .ok_or_else(|| AcError::malformed("missing word count"))?;
    let count: usize = std::str::from_utf8(count_token)
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| {
            AcError::malformed(format!(
                "word count {:?} is not a number",
                String::from_utf8_lossy(count_token)
            ))
        })?;

    let mut words = Vec::new();
    words
        .try_reserve(count.min(1 << 16))
        .map_err(AcError::out_of_memory("dictionary"))?;
    for index in 0..count {
        let word = tokens.next().ok_or_else(|| {
            AcError::malformed(format!("expected {} words, found {}", count, index))
        })?;
        words
            .try_reserve(1)
            .map_err(AcError::out_of_memory("dictionary"))?;
        words.push(word.to_vec());
    }
    if tokens.next().is_some() {
        return Err(AcError::malformed(format!(
            "more than the {} announced words",
            count
        )));
    }
    Ok(words)
}

/// Parses a text source: its first whitespace-delimited token.
pub fn parse_text(bytes: &[u8]) -> Result<Vec<u8>> {
    tokens(bytes)
        .next()
        .map(<[u8]>::to_vec)
        .ok_or_else(|| AcError::malformed("text source is empty"))
}

fn read(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| AcError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_dictionary(path: impl AsRef<Path>) -> Result<Vec<Vec<u8>>> {
    parse_dictionary(&read(path.as_ref())?)
}

pub fn read_text(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    parse_text(&read(path.as_ref())?)
}

/// Writes `words` in the dictionary source format, one word per line.
pub fn format_dictionary<W: AsRef<[u8]>>(words: &[W]) -> Vec<u8> {
    let mut out = format!("{}\n", words.len()).into_bytes();
    for word in words {
        out.extend_from_slice(word.as_ref());
        out.push(b'\n');
    }
    out
}
