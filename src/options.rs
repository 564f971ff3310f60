// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Layout and sizing knobs for the transition store.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AcError, Result};

/// Node count the store is sized for when nothing better is known.
pub const DEFAULT_MAX_NODES: usize = 10_000;

/// Target load factor of the bucket array relative to `max_nodes`.
pub const DEFAULT_FILL_RATE: f64 = 0.75;

/// Largest accepted fill rate. Past this the bucket array dwarfs the trie.
pub const MAX_FILL_RATE: f64 = 64.0;

/// How transitions are laid out in memory.
///
/// `Hash` keeps one chained bucket array sized from [`BuildOptions`];
/// `Matrix` keeps a dense row of 256 targets per node, trading memory for a
/// single indexed load per lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StoreKind {
    #[default]
    Hash,
    Matrix,
}

impl StoreKind {
    pub const ALL: [StoreKind; 2] = [StoreKind::Hash, StoreKind::Matrix];

    pub fn name(self) -> &'static str {
        match self {
            StoreKind::Hash => "hash",
            StoreKind::Matrix => "matrix",
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StoreKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        StoreKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown store '{}' (expected hash or matrix)", s))
    }
}

/// How the transition store is laid out and sized.
///
/// `max_nodes` is a sizing hint, not a cap: the trie keeps growing past it,
/// the bucket chains just get longer. `fill_rate` only matters for
/// [`StoreKind::Hash`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildOptions {
    pub max_nodes: usize,
    pub fill_rate: f64,
    pub store: StoreKind,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            max_nodes: DEFAULT_MAX_NODES,
            fill_rate: DEFAULT_FILL_RATE,
            store: StoreKind::default(),
        }
    }
}

impl BuildOptions {
    /// Options sized for a dictionary whose words total `total_len` bytes.
    ///
    /// A trie never has more than `total_len + 1` nodes.
    pub fn for_total_len(total_len: usize) -> Self {
        Self {
            max_nodes: total_len.saturating_add(1),
            ..Self::default()
        }
    }

    /// The same options with another transition layout.
    pub fn with_store(self, store: StoreKind) -> Self {
        Self { store, ..self }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.fill_rate.is_finite() || self.fill_rate <= 0.0 {
            return Err(AcError::invalid(format!(
                "fill rate must be a positive number, got {}",
                self.fill_rate
            )));
        }
        if self.fill_rate > MAX_FILL_RATE {
            return Err(AcError::invalid(format!(
                "fill rate must be at most {}, got {}",
                MAX_FILL_RATE, self.fill_rate
            )));
        }
        if self.max_nodes == 0 {
            return Err(AcError::invalid("max_nodes must be at least 1"));
        }
        if self.max_nodes as f64 * self.fill_rate >= isize::MAX as f64 {
            return Err(AcError::invalid(format!(
                "{} nodes at fill rate {} overflows the bucket array",
                self.max_nodes, self.fill_rate
            )));
        }
        Ok(())
    }

    /// `ceil(max_nodes * fill_rate)`, never below one bucket.
    pub fn bucket_count(&self) -> usize {
        ((self.max_nodes as f64 * self.fill_rate).ceil() as usize).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bucket_count_matches_fill_rate() {
        assert_eq!(BuildOptions::default().bucket_count(), 7_500);
    }

    #[test]
    fn bucket_count_rounds_up() {
        let opts = BuildOptions {
            max_nodes: 3,
            fill_rate: 0.75,
            ..BuildOptions::default()
        };
        assert_eq!(opts.bucket_count(), 3);
        let tiny = BuildOptions {
            max_nodes: 1,
            fill_rate: 0.01,
            ..BuildOptions::default()
        };
        assert_eq!(tiny.bucket_count(), 1);
    }

    #[test]
    fn rejects_non_positive_fill_rate() {
        for fill_rate in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let opts = BuildOptions {
                fill_rate,
                ..BuildOptions::default()
            };
            assert!(opts.validate().is_err(), "accepted {}", fill_rate);
        }
    }

    #[test]
    fn rejects_fill_rates_that_overflow_the_bucket_array() {
        for (max_nodes, fill_rate) in [(10, 1e300), (10, MAX_FILL_RATE * 2.0), (usize::MAX, 1.0)] {
            let opts = BuildOptions {
                max_nodes,
                fill_rate,
                ..BuildOptions::default()
            };
            assert!(
                matches!(opts.validate(), Err(AcError::InvalidOptions { .. })),
                "accepted {} x {}",
                max_nodes,
                fill_rate
            );
        }
        let widest = BuildOptions {
            max_nodes: 4,
            fill_rate: MAX_FILL_RATE,
            ..BuildOptions::default()
        };
        assert!(widest.validate().is_ok());
    }

    #[test]
    fn deserializes_with_defaults() {
        let opts: BuildOptions = serde_json::from_str(r#"{"fillRate": 0.5}"#).unwrap();
        assert_eq!(opts.max_nodes, DEFAULT_MAX_NODES);
        assert_eq!(opts.fill_rate, 0.5);
        assert_eq!(opts.store, StoreKind::Hash);

        let matrix: BuildOptions = serde_json::from_str(r#"{"store": "matrix"}"#).unwrap();
        assert_eq!(matrix.store, StoreKind::Matrix);
    }

    #[test]
    fn store_kind_names_round_trip() {
        for kind in StoreKind::ALL {
            assert_eq!(kind.to_string().parse::<StoreKind>(), Ok(kind));
        }
        assert_eq!("MATRIX".parse::<StoreKind>(), Ok(StoreKind::Matrix));
        assert!("tree".parse::<StoreKind>().is_err());
    }
}
