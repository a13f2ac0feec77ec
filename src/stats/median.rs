//! Streaming median over an append-only multiset
//!
//! Two heaps split the observations: `low` holds the smaller half (max on
//! top), `high` the larger half (min on top). Sizes never differ by more
//! than one, so the median is always at one or both tops.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

#[derive(Debug, Clone, Default)]
pub struct RunningMedian {
    low: BinaryHeap<u64>,
    high: BinaryHeap<Reverse<u64>>,
}

impl RunningMedian {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one observation. O(log n).
    pub fn observe(&mut self, value: u64) {
        match self.low.peek() {
            Some(&top) if value > top => self.high.push(Reverse(value)),
            _ => self.low.push(value),
        }

        if self.low.len() > self.high.len() + 1 {
            if let Some(top) = self.low.pop() {
                self.high.push(Reverse(top));
            }
        } else if self.high.len() > self.low.len() {
            if let Some(Reverse(bottom)) = self.high.pop() {
                self.low.push(bottom);
            }
        }
    }

    /// Current median, or `None` before the first observation
    ///
    /// Even counts average the two middle values with integer division.
    pub fn median(&self) -> Option<u64> {
        let low = self.low.peek().copied();
        let high = self.high.peek().map(|r| r.0);
        match self.low.len().cmp(&self.high.len()) {
            std::cmp::Ordering::Greater => low,
            std::cmp::Ordering::Less => high,
            std::cmp::Ordering::Equal => match (low, high) {
                (Some(a), Some(b)) => Some((a + b) / 2),
                _ => None,
            },
        }
    }

    pub fn len(&self) -> usize {
        self.low.len() + self.high.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
