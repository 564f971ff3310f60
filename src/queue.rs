// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! FIFO of node ids used by the breadth-first failure-link pass.

use std::collections::VecDeque;

use crate::error::{AcError, Result};
use crate::types::NodeId;

/// Growable FIFO that doubles its capacity when full.
///
/// Growth goes through `try_reserve`, so an allocation refusal is reported as
/// [`AcError::OutOfMemory`] rather than aborting.
#[derive(Debug, Default)]
pub struct WorkQueue {
    items: VecDeque<NodeId>,
    peak: usize,
}

impl WorkQueue {
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut items = VecDeque::new();
        items
            .try_reserve_exact(capacity.max(1))
            .map_err(AcError::out_of_memory("work queue"))?;
        Ok(Self { items, peak: 0 })
    }

    pub fn enqueue(&mut self, node: NodeId) -> Result<()> {
        if self.items.len() == self.items.capacity() {
            let grow_by = self.items.capacity().max(1);
            self.items
                .try_reserve_exact(grow_by)
                .map_err(AcError::out_of_memory("work queue"))?;
        }
        self.items.push_back(node);
        self.peak = self.peak.max(self.items.len());
        Ok(())
    }

    pub fn dequeue(&mut self) -> Result<NodeId> {
        self.items.pop_front().ok_or(AcError::QueueUnderflow)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Largest length the queue reached.
    pub fn peak(&self) -> usize {
        self.peak
    }
}
