// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Invariant errors and the checks that produce them.
//!
//! | Check                     | What's guaranteed                                   |
//! |---------------------------|-----------------------------------------------------|
//! | `verify_trie`             | every non-root node has exactly one parent, depth+1 |
//! | `verify_failure_links`    | root self-loop, links strictly shallower, same last symbol |
//! | `verify_output_counts`    | output counts and links agree with failure chains   |
//! | `verify_automaton`        | all of the above                                    |

use std::fmt;

use crate::automaton::Automaton;
use crate::trie::Trie;
use crate::types::{NodeId, ROOT};

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// A per-node table has the wrong length.
    MismatchedTables {
        table: &'static str,
        len: usize,
        nodes: usize,
    },
    /// The root has an incoming transition.
    RootHasParent { parent: NodeId },
    /// A non-root node is not reached by exactly one transition.
    NotATree { node: NodeId, parents: usize },
    /// A child's depth is not its parent's depth plus one.
    BadDepth {
        node: NodeId,
        depth: usize,
        parent_depth: usize,
    },
    /// `failure[root] != root`.
    RootNotSelfLinked { failure: NodeId },
    /// A failure link does not point to a strictly shallower node.
    FailureNotShallower {
        node: NodeId,
        failure: NodeId,
        depth: usize,
        failure_depth: usize,
    },
    /// A failure link targets a node whose path ends in a different symbol.
    FailureSymbolMismatch { node: NodeId, failure: NodeId },
    /// An output count disagrees with the failure chain.
    OutputCountMismatch {
        node: NodeId,
        claimed: usize,
        actual: usize,
    },
    /// An output link does not name the nearest terminal suffix.
    OutputLinkMismatch {
        node: NodeId,
        claimed: Option<NodeId>,
        actual: Option<NodeId>,
    },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::MismatchedTables { table, len, nodes } => {
                write!(f, "{}.len() {} != node count {}", table, len, nodes)
            }
            InvariantError::RootHasParent { parent } => {
                write!(f, "root is the target of a transition from {}", parent)
            }
            InvariantError::NotATree { node, parents } => {
                write!(f, "node {} has {} incoming transitions", node, parents)
            }
            InvariantError::BadDepth {
                node,
                depth,
                parent_depth,
            } => {
                write!(
                    f,
                    "node {} has depth {} under a parent of depth {}",
                    node, depth, parent_depth
                )
            }
            InvariantError::RootNotSelfLinked { failure } => {
                write!(f, "failure[root] = {}", failure)
            }
            InvariantError::FailureNotShallower {
                node,
                failure,
                depth,
                failure_depth,
            } => {
                write!(
                    f,
                    "failure[{}] = {} has depth {} >= {}",
                    node, failure, failure_depth, depth
                )
            }
            InvariantError::FailureSymbolMismatch { node, failure } => {
                write!(
                    f,
                    "failure[{}] = {} is not reached by the same symbol",
                    node, failure
                )
            }
            InvariantError::OutputCountMismatch {
                node,
                claimed,
                actual,
            } => {
                write!(
                    f,
                    "node {} claims {} outputs but its chain has {}",
                    node, claimed, actual
                )
            }
            InvariantError::OutputLinkMismatch {
                node,
                claimed,
                actual,
            } => {
                write!(
                    f,
                    "output_link[{}] = {:?}, nearest terminal suffix is {:?}",
                    node, claimed, actual
                )
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// Incoming transition of every node: `(parent, symbol)`; `None` for the root.
fn parents(trie: &Trie) -> Result<Vec<Option<(NodeId, u8)>>, InvariantError> {
    let mut parent = vec![None; trie.node_count()];
    let mut incoming = vec![0usize; trie.node_count()];
    for edge in trie.edges() {
        if edge.target == ROOT {
            return Err(InvariantError::RootHasParent {
                parent: edge.source,
            });
        }
        incoming[edge.target] += 1;
        parent[edge.target] = Some((edge.source, edge.symbol));
    }
    for (node, &count) in incoming.iter().enumerate().skip(1) {
        if count != 1 {
            return Err(InvariantError::NotATree {
                node,
                parents: count,
            });
        }
    }
    Ok(parent)
}

/// Checks the trie property and the depth table.
pub fn verify_trie(trie: &Trie) -> Result<(), InvariantError> {
    let parent = parents(trie)?;
    for (node, entry) in parent.iter().enumerate() {
        if let Some((p, _)) = *entry {
            if trie.depth(node) != trie.depth(p) + 1 {
                return Err(InvariantError::BadDepth {
                    node,
                    depth: trie.depth(node),
                    parent_depth: trie.depth(p),
                });
            }
        }
    }
    Ok(())
}

/// Checks the root self-loop, strict depth decrease and symbol agreement.
pub fn verify_failure_links(ac: &Automaton) -> Result<(), InvariantError> {
    let trie = ac.trie();
    let nodes = trie.node_count();
    for (table, len) in [
        ("failure", ac.failure.len()),
        ("output_link", ac.output_link.len()),
        ("output_count", ac.output_count.len()),
    ] {
        if len != nodes {
            return Err(InvariantError::MismatchedTables { table, len, nodes });
        }
    }

    if ac.failure(ROOT) != ROOT {
        return Err(InvariantError::RootNotSelfLinked {
            failure: ac.failure(ROOT),
        });
    }

    let parent = parents(trie)?;
    for node in 1..nodes {
        let failure = ac.failure(node);
        if trie.depth(failure) >= trie.depth(node) {
            return Err(InvariantError::FailureNotShallower {
                node,
                failure,
                depth: trie.depth(node),
                failure_depth: trie.depth(failure),
            });
        }
        if failure != ROOT {
            let symbol = parent[node].map(|(_, s)| s);
            let failure_symbol = parent[failure].map(|(_, s)| s);
            if symbol != failure_symbol {
                return Err(InvariantError::FailureSymbolMismatch { node, failure });
            }
        }
    }
    Ok(())
}

/// Checks output counts and output links against a direct chain walk.
pub fn verify_output_counts(ac: &Automaton) -> Result<(), InvariantError> {
    let trie = ac.trie();
    let reports = |n: NodeId| n != ROOT && trie.is_terminal(n);
    for node in 0..trie.node_count() {
        let mut actual = 0;
        let mut nearest = None;
        let mut current = node;
        loop {
            if reports(current) {
                actual += 1;
                if current != node && nearest.is_none() {
                    nearest = Some(current);
                }
            }
            if current == ROOT {
                break;
            }
            current = ac.failure(current);
        }
        if ac.output_count(node) != actual {
            return Err(InvariantError::OutputCountMismatch {
                node,
                claimed: ac.output_count(node),
                actual,
            });
        }
        if ac.output_link(node) != nearest {
            return Err(InvariantError::OutputLinkMismatch {
                node,
                claimed: ac.output_link(node),
                actual: nearest,
            });
        }
    }
    Ok(())
}

/// Runs every structural check.
pub fn verify_automaton(ac: &Automaton) -> Result<(), InvariantError> {
    verify_trie(ac.trie())?;
    verify_failure_links(ac)?;
    verify_output_counts(ac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_automata_verify() {
        for words in [
            vec!["he", "she", "his", "hers"],
            vec!["a", "aa", "aaa"],
            vec![],
            vec!["abcd", "bcdx", "cd", "d"],
        ] {
            let ac = Automaton::from_words(&words).unwrap();
            assert_eq!(verify_automaton(&ac), Ok(()), "{:?}", words);
        }
    }

    #[test]
    fn corrupted_failure_link_is_caught() {
        let mut ac = Automaton::from_words(["ab", "b"]).unwrap();
        ac.failure[ROOT] = 1;
        assert!(matches!(
            verify_failure_links(&ac),
            Err(InvariantError::RootNotSelfLinked { failure: 1 })
        ));
    }

    #[test]
    fn deeper_failure_target_is_caught() {
        let mut ac = Automaton::from_words(["ab"]).unwrap();
        // node 1 = "a", node 2 = "ab"
        ac.failure[1] = 2;
        assert!(matches!(
            verify_failure_links(&ac),
            Err(InvariantError::FailureNotShallower { node: 1, .. })
        ));
    }

    #[test]
    fn wrong_output_count_is_caught() {
        let mut ac = Automaton::from_words(["ab", "b"]).unwrap();
        ac.output_count[2] = 1;
        assert!(matches!(
            verify_output_counts(&ac),
            Err(InvariantError::OutputCountMismatch { node: 2, claimed: 1, actual: 2 })
        ));
    }

    #[test]
    fn display_is_readable() {
        let err = InvariantError::NotATree {
            node: 4,
            parents: 2,
        };
        assert_eq!(err.to_string(), "node 4 has 2 incoming transitions");
    }
}
