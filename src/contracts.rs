// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the automaton.
//!
//! Debug-mode assertions that the structures coming out of the build phase
//! and the matches coming out of a scan are well formed. They compile to
//! nothing in release builds.
//!
//! | Contract Function               | Checked property                              |
//! |---------------------------------|-----------------------------------------------|
//! | `check_automaton_well_formed`   | [`crate::verify::verify_automaton`] passes    |
//! | `check_match_well_formed`       | match is non-empty and spells its pattern length |
//! | `check_state_in_range`          | a scan state names an existing node           |

use crate::automaton::Automaton;
use crate::types::{Match, NodeId};

// ============================================================================
// COMPILE-TIME ASSERTIONS
// ============================================================================

const _: () = {
    // The root is node 0; every per-node table relies on it.
    assert!(crate::types::ROOT == 0);
};

// ============================================================================
// BUILD CONTRACTS
// ============================================================================

/// Check that a freshly linked automaton satisfies every structural invariant.
///
/// Walks the whole automaton, so only runs in debug builds.
#[inline]
pub fn check_automaton_well_formed(ac: &Automaton) {
    #[cfg(debug_assertions)]
    {
        if let Err(e) = crate::verify::verify_automaton(ac) {
            panic!("Contract violation: automaton not well formed - {}", e);
        }
    }
    #[cfg(not(debug_assertions))]
    let _ = ac;
}

// ============================================================================
// SCAN CONTRACTS
// ============================================================================

/// Check that a scan state is a node of `ac`.
#[inline]
pub fn check_state_in_range(ac: &Automaton, state: NodeId) {
    debug_assert!(
        state < ac.node_count(),
        "Contract violation: state {} out of range - automaton has {} nodes",
        state,
        ac.node_count()
    );
}

/// Check that a reported match covers exactly its pattern inside the text.
#[inline]
pub fn check_match_well_formed(ac: &Automaton, m: &Match, text_len: usize) {
    debug_assert!(
        m.start < m.end && m.end <= text_len,
        "Contract violation: match {:?} outside text of length {}",
        m,
        text_len
    );
    debug_assert!(
        ac.pattern_len(m.pattern) == Some(m.len()),
        "Contract violation: match {:?} does not span pattern length {:?}",
        m,
        ac.pattern_len(m.pattern)
    );
}
