// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Breadth-first failure-link construction.
//!
//! For a node `v` spelling the path `w`, `failure[v]` is the node spelling
//! the longest proper suffix of `w` that is also a trie path. Computing it
//! for `v = goto(u, c)` only needs `failure[u]` and the links of shallower
//! nodes, so nodes are processed in breadth-first (non-decreasing depth)
//! order:
//!
//! ```text
//! dictionary {he, she, his, hers}
//!
//! node   path   failure        why
//! ─────  ─────  ─────────────  ───────────────────────────────
//!   1    h      0 (root)       depth 1
//!   3    s      0 (root)       depth 1
//!   2    he     0 (root)       no 'e' from failure(h)=root
//!   6    hi     0 (root)       no 'i' from root
//!   4    sh     1 (h)          'h' from failure(s)=root
//!   8    her    0 (root)       no 'r' from failure(he)=root
//!   7    his    3 (s)          's' from failure(hi)=root
//!   5    she    2 (he)         'e' from failure(sh)=h
//!   9    hers   3 (s)          's' from failure(her)=root
//! ```
//!
//! The same pass fills the output links used by the matcher: the nearest
//! terminal node on each failure chain and the number of terminal nodes the
//! chain holds, so a scan can report every word ending at a position
//! without rescanning.

use tracing::{debug, trace};

use crate::automaton::Automaton;
use crate::contracts;
use crate::error::{AcError, Result};
use crate::queue::WorkQueue;
use crate::trie::Trie;
use crate::types::{NodeId, ROOT};

/// Links every node of `trie` and returns the read-only automaton.
///
/// A trie holding only the root links the root to itself and nothing else.
pub fn compute_failure_links(trie: Trie) -> Result<Automaton> {
    let node_count = trie.node_count();

    let mut failure: Vec<NodeId> = filled(node_count, ROOT, "failure links")?;
    let mut output_link: Vec<Option<NodeId>> = filled(node_count, None, "output links")?;
    let mut output_count: Vec<usize> = filled(node_count, 0, "output counts")?;

    let reports = |node: NodeId| node != ROOT && trie.is_terminal(node);

    let mut queue = WorkQueue::with_capacity(trie.store().out_degree(ROOT))?;
    for (_, child) in trie.children(ROOT) {
        failure[child] = ROOT;
        output_count[child] = usize::from(reports(child));
        queue.enqueue(child)?;
    }

    while !queue.is_empty() {
        let parent = queue.dequeue()?;
        for (symbol, child) in trie.children(parent) {
            queue.enqueue(child)?;

            let mut fallback = failure[parent];
            let target = loop {
                if let Some(next) = trie.lookup(fallback, symbol) {
                    break next;
                }
                if fallback == ROOT {
                    break ROOT;
                }
                fallback = failure[fallback];
            };

            failure[child] = target;
            output_link[child] = if reports(target) {
                Some(target)
            } else {
                output_link[target]
            };
            output_count[child] = usize::from(reports(child)) + output_count[target];
            trace!(node = child, failure = target, "failure link");
        }
    }

    debug!(
        nodes = node_count,
        queue_peak = queue.peak(),
        "failure links computed"
    );

    let automaton = Automaton {
        trie,
        failure,
        output_link,
        output_count,
    };
    contracts::check_automaton_well_formed(&automaton);
    Ok(automaton)
}

fn filled<T: Clone>(len: usize, value: T, context: &'static str) -> Result<Vec<T>> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)
        .map_err(AcError::out_of_memory(context))?;
    v.resize(len, value);
    Ok(v)
}
