// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Transition store: `(source node, byte) -> target node`.
//!
//! Two layouts sit behind the same API, chosen by [`StoreKind`]:
//!
//! ```text
//! Hash: buckets (fixed count = ceil(max_nodes * fill_rate))
//! ┌───┐
//! │ 0 │──▶ (3,'e')→4 ──▶ (0,'h')→1
//! ├───┤
//! │ 1 │──▶ (1,'i')→6
//! ├───┤
//! │ … │
//! └───┘
//!
//! Matrix: one row of 256 targets per node (0 = no transition)
//!        …  'e'  'h'  'i'  …  's'  …
//!   0: [ …   0    1    0   …   3   … ]
//!   1: [ …   2    0    6   …   0   … ]
//!
//! outgoing (one list per node, insertion order, both layouts)
//!   0: [('h',1), ('s',3)]
//!   1: [('e',2), ('i',6)]
//! ```
//!
//! Buckets are keyed by `(source, symbol)` only, so placement does not depend
//! on which word created the edge. Matrix rows use the root as the empty
//! marker, which is safe because the root is never a transition target. The
//! per-node `outgoing` lists give the breadth-first builder and the printers
//! a deterministic traversal order whatever the layout.

use tracing::trace;

use crate::error::{AcError, Result};
use crate::options::{BuildOptions, StoreKind};
use crate::types::{NodeId, ROOT};

/// Symbols per matrix row: every byte value.
pub const ALPHABET_SIZE: usize = 256;

/// Rows reserved up front for a matrix store, whatever `max_nodes` says.
const MATRIX_PREALLOC_ROWS: usize = 1 << 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Transition {
    source: NodeId,
    symbol: u8,
    target: NodeId,
}

type Row = [NodeId; ALPHABET_SIZE];

#[derive(Debug, Clone)]
enum Table {
    Hashed(Vec<Vec<Transition>>),
    Matrix(Vec<Row>),
}

#[inline]
fn bucket_of(bucket_count: usize, source: NodeId, symbol: u8) -> usize {
    let key = ((source as u64) << 8) | u64::from(symbol);
    (key % bucket_count as u64) as usize
}

/// Transition table of a trie under construction.
#[derive(Debug, Clone)]
pub struct TransitionStore {
    table: Table,
    outgoing: Vec<Vec<(u8, NodeId)>>,
    transition_count: usize,
}

impl TransitionStore {
    /// Creates a store holding only the root node.
    pub fn with_options(options: &BuildOptions) -> Result<Self> {
        options.validate()?;

        let table = match options.store {
            StoreKind::Hash => {
                let bucket_count = options.bucket_count();
                let mut buckets = Vec::new();
                buckets
                    .try_reserve_exact(bucket_count)
                    .map_err(AcError::out_of_memory("transition buckets"))?;
                buckets.resize_with(bucket_count, Vec::new);
                Table::Hashed(buckets)
            }
            StoreKind::Matrix => {
                let mut rows = Vec::new();
                rows.try_reserve(options.max_nodes.min(MATRIX_PREALLOC_ROWS))
                    .map_err(AcError::out_of_memory("transition matrix"))?;
                rows.push([ROOT; ALPHABET_SIZE]);
                Table::Matrix(rows)
            }
        };

        let mut outgoing = Vec::new();
        outgoing
            .try_reserve(options.max_nodes.min(1 << 16))
            .map_err(AcError::out_of_memory("node table"))?;
        outgoing.push(Vec::new());

        Ok(Self {
            table,
            outgoing,
            transition_count: 0,
        })
    }

    /// A hash store with default sizing, allocated infallibly.
    pub(crate) fn new() -> Self {
        let buckets = vec![Vec::new(); BuildOptions::default().bucket_count()];
        Self {
            table: Table::Hashed(buckets),
            outgoing: vec![Vec::new()],
            transition_count: 0,
        }
    }

    pub fn kind(&self) -> StoreKind {
        match self.table {
            Table::Hashed(_) => StoreKind::Hash,
            Table::Matrix(_) => StoreKind::Matrix,
        }
    }

    /// Target of the transition labeled `symbol` leaving `source`, if any.
    #[inline]
    pub fn lookup(&self, source: NodeId, symbol: u8) -> Option<NodeId> {
        match &self.table {
            Table::Hashed(buckets) => buckets[bucket_of(buckets.len(), source, symbol)]
                .iter()
                .find(|t| t.source == source && t.symbol == symbol)
                .map(|t| t.target),
            Table::Matrix(rows) => rows
                .get(source)
                .map(|row| row[usize::from(symbol)])
                .filter(|&target| target != ROOT),
        }
    }

    /// Returns the existing target, or allocates a fresh node and links it.
    pub fn insert_or_get(&mut self, source: NodeId, symbol: u8) -> Result<NodeId> {
        debug_assert!(
            source < self.node_count(),
            "insert_or_get from unknown node {}",
            source
        );
        if let Some(target) = self.lookup(source, symbol) {
            return Ok(target);
        }

        // Reserve everything first so a failure leaves the store untouched.
        let target = self.outgoing.len();
        self.outgoing
            .try_reserve(1)
            .map_err(AcError::out_of_memory("node table"))?;
        self.outgoing[source]
            .try_reserve(1)
            .map_err(AcError::out_of_memory("adjacency list"))?;
        match &mut self.table {
            Table::Hashed(buckets) => {
                let bucket = bucket_of(buckets.len(), source, symbol);
                buckets[bucket]
                    .try_reserve(1)
                    .map_err(AcError::out_of_memory("transition buckets"))?;
                buckets[bucket].push(Transition {
                    source,
                    symbol,
                    target,
                });
                trace!(source, symbol, target, bucket, "new transition");
            }
            Table::Matrix(rows) => {
                rows.try_reserve(1)
                    .map_err(AcError::out_of_memory("transition matrix"))?;
                rows[source][usize::from(symbol)] = target;
                rows.push([ROOT; ALPHABET_SIZE]);
                trace!(source, symbol, target, "new transition");
            }
        }

        self.outgoing.push(Vec::new());
        self.outgoing[source].push((symbol, target));
        self.transition_count += 1;
        Ok(target)
    }

    /// Transitions leaving `source`, in the order they were created.
    pub fn outgoing(&self, source: NodeId) -> impl Iterator<Item = (u8, NodeId)> + '_ {
        self.outgoing
            .get(source)
            .into_iter()
            .flat_map(|edges| edges.iter().copied())
    }

    pub fn out_degree(&self, source: NodeId) -> usize {
        self.outgoing.get(source).map_or(0, Vec::len)
    }

    /// Number of allocated nodes, root included.
    pub fn node_count(&self) -> usize {
        self.outgoing.len()
    }

    pub fn transition_count(&self) -> usize {
        self.transition_count
    }

    /// Bucket array length; zero for a matrix store.
    pub fn bucket_count(&self) -> usize {
        match &self.table {
            Table::Hashed(buckets) => buckets.len(),
            Table::Matrix(_) => 0,
        }
    }

    /// Length of the longest bucket chain; zero for a matrix store.
    pub fn longest_chain(&self) -> usize {
        match &self.table {
            Table::Hashed(buckets) => buckets.iter().map(Vec::len).max().unwrap_or(0),
            Table::Matrix(_) => 0,
        }
    }

    /// True when the store holds nothing but the root.
    pub fn is_empty(&self) -> bool {
        self.transition_count == 0 && self.outgoing(ROOT).next().is_none()
    }
}
