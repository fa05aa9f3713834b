//! This module contains the bounded worst-first heap used to keep the K best pairs seen so far.

use std::collections::BinaryHeap;

use crate::common_types::PairCandidate;

/// Keeps the `capacity` smallest [`PairCandidate`]s offered to it.
///
/// `BinaryHeap` is a max-heap, so the top is always the current worst (K-th smallest) pair.
/// That pair is the admission threshold: a new candidate only gets in if it orders strictly
/// before it. Candidates are totally ordered (distance, then input indices), which fixes the
/// tie policy for every caller.
#[derive(Debug)]
pub struct TopKAccumulator {
    capacity: usize,
    heap: BinaryHeap<PairCandidate>,
}

impl TopKAccumulator {
    pub fn new(capacity: usize) -> Self {
        TopKAccumulator {
            capacity,
            heap: BinaryHeap::with_capacity(capacity + 1), // +1 for push before pop
        }
    }

    /// Offers a candidate and returns whether it was kept.
    pub fn offer(&mut self, candidate: PairCandidate) -> bool {
        if self.capacity == 0 {
            return false;
        }
        if self.heap.len() < self.capacity {
            self.heap.push(candidate);
            return true;
        }
        match self.heap.peek() {
            Some(worst) if candidate < *worst => {
                self.heap.pop();
                self.heap.push(candidate);
                true
            }
            _ => false,
        }
    }

    /// The largest distance held, or `+inf` while fewer than `capacity` pairs are held.
    pub fn worst_distance(&self) -> f64 {
        self.full_worst().map_or(f64::INFINITY, PairCandidate::distance)
    }

    /// Exact form of [`worst_distance`](Self::worst_distance); `None` stands for unbounded.
    pub fn worst_squared_distance(&self) -> Option<u128> {
        self.full_worst().map(PairCandidate::squared_distance)
    }

    fn full_worst(&self) -> Option<&PairCandidate> {
        if self.is_full() { self.heap.peek() } else { None }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.capacity > 0 && self.heap.len() == self.capacity
    }

    /// Consumes the accumulator, returning its pairs in ascending order.
    pub fn into_sorted_vec(self) -> Vec<PairCandidate> {
        self.heap.into_sorted_vec()
    }
}

impl Extend<PairCandidate> for TopKAccumulator {
    fn extend<I: IntoIterator<Item = PairCandidate>>(&mut self, iter: I) {
        for candidate in iter {
            self.offer(candidate);
        }
    }
}
