//! Per-side battle queues
//!
//! The Jedi queue surfaces its weakest deployment and the Sith queue its
//! strongest, so comparing the two tops tells whether any pairing on the
//! planet can fight. Equal force ratings go to the earlier arrival.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::battle::deployment::Deployment;
use crate::core::types::Side;

/// Heap entry ranking a deployment by its side's rule
#[derive(Debug, Clone)]
struct Ranked(Deployment);

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked {}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        let by_force = match self.0.side {
            Side::Jedi => other.0.force.cmp(&self.0.force),
            Side::Sith => self.0.force.cmp(&other.0.force),
        };
        by_force.then_with(|| other.0.arrival.cmp(&self.0.arrival))
    }
}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Live deployments of one side on one planet
#[derive(Debug, Clone)]
pub struct BattalionQueue {
    side: Side,
    heap: BinaryHeap<Ranked>,
}

impl BattalionQueue {
    pub fn new(side: Side) -> Self {
        Self { side, heap: BinaryHeap::new() }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Enqueue a live deployment
    ///
    /// Defeated deployments never enter a queue.
    pub fn push(&mut self, deployment: Deployment) {
        debug_assert_eq!(deployment.side, self.side);
        debug_assert!(!deployment.is_defeated(), "defeated deployment enqueued");
        self.heap.push(Ranked(deployment));
    }

    pub fn peek(&self) -> Option<&Deployment> {
        self.heap.peek().map(|r| &r.0)
    }

    pub fn pop(&mut self) -> Option<Deployment> {
        self.heap.pop().map(|r| r.0)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Deployments in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &Deployment> {
        self.heap.iter().map(|r| &r.0)
    }

    /// Troops still standing across every queued deployment
    pub fn remaining_troops(&self) -> u64 {
        self.iter().map(|d| d.troops as u64).sum()
    }
}
