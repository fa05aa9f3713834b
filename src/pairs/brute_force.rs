//! Exhaustive pairwise scan. Used directly as a strategy and as the base case of the
//! divide-and-conquer recursion.

use tracing::debug;

use super::ResultSet;
use super::heap_utils::TopKAccumulator;
use crate::common_types::{IndexedPoint, PairCandidate, Point};
use crate::error::{self, Result};

/// O(N^2) time, O(K) extra space.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceSelector;

impl BruteForceSelector {
    pub fn query(points: &[Point], k: usize) -> Result<ResultSet> {
        error::validate(points.len(), k)?;
        debug!(n = points.len(), k, "brute-force query");
        let indexed = IndexedPoint::index_all(points);
        Ok(ResultSet::from_sorted(select(&indexed, k)))
    }
}

/// Returns the `min(k, C(n, 2))` best pairs among `points`, ascending.
pub(crate) fn select(points: &[IndexedPoint], k: usize) -> Vec<PairCandidate> {
    let mut best = TopKAccumulator::new(k);
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            if let Some(bound) = best.worst_squared_distance() {
                // Cheap reject before building the candidate; ties still go through `offer`.
                if a.point.squared_distance(&b.point) > bound {
                    continue;
                }
            }
            if let Some(candidate) = PairCandidate::between(a, b) {
                best.offer(candidate);
            }
        }
    }
    best.into_sorted_vec()
}
