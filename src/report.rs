// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text dumps of a trie or automaton.
//!
//! - [`edge_list`]: one line per transition, `source -> target : symbol, terminal`
//! - [`to_dot`]: a Graphviz digraph with failure links drawn dashed

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::automaton::Automaton;
use crate::trie::Trie;
use crate::types::ROOT;

/// Printable ASCII symbols verbatim, everything else as `\xNN`.
fn symbol_label(symbol: u8) -> String {
    if symbol.is_ascii_graphic() {
        (symbol as char).to_string()
    } else {
        format!("\\x{:02x}", symbol)
    }
}

/// One `source -> target : symbol, terminalFlag` line per transition.
///
/// `terminalFlag` is `1` if the target ends a word, else `0`. Lines are
/// grouped by source node, in node id order.
pub fn edge_list(trie: &Trie) -> String {
    let mut out = String::new();
    for edge in trie.edges() {
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "{} -> {} : {}, {}",
            edge.source,
            edge.target,
            symbol_label(edge.symbol),
            u8::from(edge.terminal)
        );
    }
    out
}

/// What [`to_dot`] draws besides the trie itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DotOptions {
    pub failure_links: bool,
    /// Also draw links that point back to the root.
    pub root_failure_links: bool,
}

impl Default for DotOptions {
    fn default() -> Self {
        Self {
            failure_links: true,
            root_failure_links: false,
        }
    }
}

fn dot_escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Renders the automaton as a left-to-right Graphviz digraph.
pub fn to_dot(ac: &Automaton, options: DotOptions) -> String {
    let trie = ac.trie();
    let mut out = String::from("digraph acmatch {\n\trankdir=LR;\n");

    let terminals: Vec<String> = (0..trie.node_count())
        .filter(|&n| n != ROOT && trie.is_terminal(n))
        .map(|n| n.to_string())
        .collect();
    if !terminals.is_empty() {
        let _ = writeln!(out, "\tnode [shape = doublecircle]; {};", terminals.join(" "));
    }
    out.push_str("\tnode [shape = circle];\n");

    for edge in trie.edges() {
        let _ = writeln!(
            out,
            "\t{} -> {} [label = \"{}\"];",
            edge.source,
            edge.target,
            dot_escape(&symbol_label(edge.symbol))
        );
    }

    if options.failure_links {
        for node in 1..trie.node_count() {
            let failure = ac.failure(node);
            if failure == ROOT && !options.root_failure_links {
                continue;
            }
            let _ = writeln!(
                out,
                "\t{} -> {} [style = dashed, color = gray];",
                node, failure
            );
        }
    }

    out.push_str("}\n");
    out
}
