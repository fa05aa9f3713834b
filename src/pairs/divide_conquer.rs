//! Divide-and-conquer search for the K closest pairs.
//!
//! The classical closest-pair recursion, generalized to K results: each half returns its own
//! best `min(K, C(n, 2))` pairs, and the strip around the split line is searched with the K-th
//! best distance of both halves combined as its bound. Any cross pair that belongs in the top K
//! is within that distance, so it is inside the strip and found there.

use tracing::{debug, trace};

use super::heap_utils::TopKAccumulator;
use super::strip::{self, SplitLine};
use super::{QueryConfig, ResultSet, brute_force};
use crate::common_types::{IndexedPoint, PairCandidate, Point};
use crate::error::{self, Result};

/// O(N log N) for small K; falls back towards brute force inside the strip when K is large.
#[derive(Debug, Clone, Copy, Default)]
pub struct DivideAndConquerEngine;

impl DivideAndConquerEngine {
    pub fn query(points: &[Point], k: usize) -> Result<ResultSet> {
        Self::query_with_config(points, k, &QueryConfig::default())
    }

    pub fn query_with_config(points: &[Point], k: usize, config: &QueryConfig) -> Result<ResultSet> {
        error::validate(points.len(), k)?;
        debug!(n = points.len(), k, leaf_size = config.leaf_size(), parallel = config.parallel, "divide-and-conquer query");

        let indexed = IndexedPoint::index_all(points);
        let mut sorted_x = indexed.clone();
        sorted_x.sort_unstable_by_key(|p| (p.point.x, p.index));
        let mut sorted_y = indexed;
        sorted_y.sort_unstable_by_key(|p| (p.point.y, p.index));

        Ok(ResultSet::from_sorted(search_recursive(&sorted_x, &sorted_y, k, config)))
    }
}

/// `sorted_x` and `sorted_y` hold the same points, ordered by `(x, index)` and `(y, index)`.
fn search_recursive(
    sorted_x: &[IndexedPoint],
    sorted_y: &[IndexedPoint],
    k: usize,
    config: &QueryConfig,
) -> Vec<PairCandidate> {
    let n = sorted_x.len();
    if n <= config.leaf_size() {
        return brute_force::select(sorted_x, k);
    }

    // Left half gets ceil(n / 2) points.
    let mid = n.div_ceil(2);
    let (left_x, right_x) = sorted_x.split_at(mid);
    let split = SplitLine::after(&left_x[mid - 1]);

    let (left_y, right_y): (Vec<IndexedPoint>, Vec<IndexedPoint>) =
        sorted_y.iter().partition(|p| split.is_left(p));

    let (left_result, right_result) = if config.parallel && n >= config.parallel_cutoff {
        rayon::join(
            || search_recursive(left_x, &left_y, k, config),
            || search_recursive(right_x, &right_y, k, config),
        )
    } else {
        (
            search_recursive(left_x, &left_y, k, config),
            search_recursive(right_x, &right_y, k, config),
        )
    };

    let mut merged = TopKAccumulator::new(k);
    merged.extend(left_result);
    merged.extend(right_result);

    // K-th best so far across both halves; unbounded while they hold fewer than K pairs.
    let bound = merged.worst_squared_distance();
    trace!(
        n,
        split_x = split.x,
        strip = strip::strip_width(sorted_y, split, bound),
        held = merged.len(),
        "merging partition"
    );

    merged.extend(strip::cross_pairs(sorted_y, split, bound, k));
    merged.into_sorted_vec()
}
