// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: structural checks over a built automaton.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Type-level phases**: a [`crate::Trie`] can only be scanned after
//!    [`crate::compute_failure_links`] turns it into an [`crate::Automaton`],
//!    so no scan can observe half-built links.
//!
//! 2. **Fallible checks** (this module) that walk the whole structure and
//!    name the first broken invariant. [`crate::contracts`] runs them in
//!    debug builds; tests call them directly.

mod types;

pub use types::*;
