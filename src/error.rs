// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type shared by the build, scan and source-reading layers.
//!
//! Allocation is always fallible here: every growth of the node table, the
//! transition buckets or the work queue goes through `try_reserve`, and a
//! refusal surfaces as [`AcError::OutOfMemory`] instead of aborting the
//! process.

use std::collections::TryReserveError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors produced while building or feeding an automaton.
#[derive(Debug)]
pub enum AcError {
    /// An allocation for the named structure was refused.
    OutOfMemory { context: &'static str },
    /// A dictionary or text source did not have the expected shape.
    MalformedInput { reason: String },
    /// `dequeue` was called on an empty work queue.
    QueueUnderflow,
    /// Build or generator options are out of range.
    InvalidOptions { reason: String },
    /// Reading a source file failed.
    Io { path: PathBuf, source: io::Error },
}

impl AcError {
    pub(crate) fn out_of_memory(context: &'static str) -> impl FnOnce(TryReserveError) -> Self {
        move |_| AcError::OutOfMemory { context }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        AcError::MalformedInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        AcError::InvalidOptions {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for AcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AcError::OutOfMemory { context } => {
                write!(f, "out of memory while growing {}", context)
            }
            AcError::MalformedInput { reason } => write!(f, "malformed input: {}", reason),
            AcError::QueueUnderflow => write!(f, "dequeue on an empty work queue"),
            AcError::InvalidOptions { reason } => write!(f, "invalid options: {}", reason),
            AcError::Io { path, source } => {
                write!(f, "cannot read {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for AcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AcError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AcError>;
