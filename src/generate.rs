// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Random dictionaries and texts for benchmarking.
//!
//! Both generators draw from the first `alphabet_size` symbols of
//! [`ALPHABET`], so a dictionary and a text generated with the same size
//! share their symbols. Pass a seeded `SmallRng` for reproducible data.

use rand::Rng;

use crate::error::{AcError, Result};

/// Printable ASCII without whitespace, in generation order.
pub const ALPHABET: &[u8; 94] = b"abcdefghijklmnopqrstuvwxyz\
ABCDEFGHIJKLMNOPQRSTUVWXYZ\
0123456789\
!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

fn check_alphabet(alphabet_size: usize) -> Result<&'static [u8]> {
    if alphabet_size == 0 || alphabet_size > ALPHABET.len() {
        return Err(AcError::invalid(format!(
            "alphabet size {} outside 1..={}",
            alphabet_size,
            ALPHABET.len()
        )));
    }
    Ok(&ALPHABET[..alphabet_size])
}

fn random_bytes<R: Rng + ?Sized>(rng: &mut R, len: usize, symbols: &[u8]) -> Vec<u8> {
    (0..len)
        .map(|_| symbols[rng.gen_range(0..symbols.len())])
        .collect()
}

/// A text of exactly `len` symbols.
pub fn generate_text<R: Rng + ?Sized>(
    rng: &mut R,
    len: usize,
    alphabet_size: usize,
) -> Result<Vec<u8>> {
    let symbols = check_alphabet(alphabet_size)?;
    if len == 0 {
        return Err(AcError::invalid("text length must be positive"));
    }
    Ok(random_bytes(rng, len, symbols))
}

/// `count` words, each with a length drawn uniformly from `min_len..=max_len`.
///
/// Words may repeat.
pub fn generate_words<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    min_len: usize,
    max_len: usize,
    alphabet_size: usize,
) -> Result<Vec<Vec<u8>>> {
    let symbols = check_alphabet(alphabet_size)?;
    if count == 0 {
        return Err(AcError::invalid("word count must be positive"));
    }
    if min_len == 0 {
        return Err(AcError::invalid("minimum word length must be positive"));
    }
    if max_len < min_len {
        return Err(AcError::invalid(format!(
            "maximum word length {} below minimum {}",
            max_len, min_len
        )));
    }
    Ok((0..count)
        .map(|_| {
            let len = rng.gen_range(min_len..=max_len);
            random_bytes(rng, len, symbols)
        })
        .collect())
}
