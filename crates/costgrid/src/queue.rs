//! Min-priority queue of relaxation candidates.
//!
//! Thin wrapper over [`std::collections::BinaryHeap`] popping the lowest
//! cost first. Duplicate entries for one pixel are expected; the transform
//! reconciles them with a stale check at pop time instead of decrease-key.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// A queued relaxation candidate: pixel index plus a cost upper bound.
///
/// Ordered by cost alone; ties compare equal and may pop in any order.
#[derive(Debug, Clone, Copy)]
pub struct QueueItem<T> {
    /// Linear pixel index.
    pub idx: usize,
    /// Candidate path cost.
    pub cost: T,
}

impl<T: PartialOrd> PartialEq for QueueItem<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}

// Costs are finite by the transform's contract, so the ordering is total.
impl<T: PartialOrd> Eq for QueueItem<T> {}

impl<T: PartialOrd> PartialOrd for QueueItem<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: PartialOrd> Ord for QueueItem<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost.partial_cmp(&other.cost).unwrap()
    }
}

/// Reusable min-heap of [`QueueItem`]s.
///
/// The transform takes it empty and returns it empty; keeping one instance
/// per worker retains heap capacity across frames.
#[derive(Debug, Clone)]
pub struct CostQueue<T> {
    heap: BinaryHeap<Reverse<QueueItem<T>>>,
}

impl<T: PartialOrd> CostQueue<T> {
    /// Construct an empty queue.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    /// Construct an empty queue with preallocated capacity.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(n),
        }
    }

    /// Enqueue a candidate.
    #[inline]
    pub fn push(&mut self, idx: usize, cost: T) {
        self.heap.push(Reverse(QueueItem { idx, cost }));
    }

    /// Remove and return the lowest-cost candidate.
    #[inline]
    pub fn pop(&mut self) -> Option<QueueItem<T>> {
        self.heap.pop().map(|Reverse(item)| item)
    }

    /// Number of queued candidates.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// `true` when no candidates are queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drop all candidates, keeping the allocation.
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<T: PartialOrd> Default for CostQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_ascending_cost_order() {
        let mut q = CostQueue::new();
        q.push(3, 2.5f32);
        q.push(1, 0.5);
        q.push(7, 1.5);
        q.push(2, 4.0);

        let costs: Vec<f32> = std::iter::from_fn(|| q.pop().map(|item| item.cost)).collect();
        assert_eq!(costs, vec![0.5, 1.5, 2.5, 4.0]);
        assert!(q.is_empty());
    }

    #[test]
    fn ties_all_surface() {
        let mut q = CostQueue::new();
        q.push(0, 1.0f64);
        q.push(1, 1.0);
        q.push(2, 1.0);

        let mut seen: Vec<usize> = std::iter::from_fn(|| q.pop().map(|item| item.idx)).collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2]);
    }

    #[test]
    fn duplicate_indices_are_kept() {
        let mut q = CostQueue::new();
        q.push(5, 3.0f32);
        q.push(5, 1.0);
        assert_eq!(q.len(), 2);
        assert_eq!(q.pop().unwrap().cost, 1.0);
        assert_eq!(q.pop().unwrap().idx, 5);
    }

    #[test]
    fn clear_empties_for_reuse() {
        let mut q = CostQueue::with_capacity(16);
        q.push(0, 1.0f32);
        q.push(1, 2.0);
        q.clear();
        assert!(q.is_empty());
        q.push(9, 0.25);
        assert_eq!(q.pop().unwrap().idx, 9);
    }
}
