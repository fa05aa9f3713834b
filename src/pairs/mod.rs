//! K-closest-pairs queries over planar integer points.

pub mod brute_force;
pub mod divide_conquer;
pub mod heap_utils;
pub mod strip;

pub use brute_force::BruteForceSelector;
pub use divide_conquer::DivideAndConquerEngine;
pub use heap_utils::TopKAccumulator;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::common_types::{PairCandidate, Point};
use crate::error::Result;

/// Defines the search strategy used to answer a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SearchStrategy {
    BruteForce,
    DivideAndConquer,
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchStrategy::BruteForce => f.write_str("brute-force"),
            SearchStrategy::DivideAndConquer => f.write_str("divide-and-conquer"),
        }
    }
}

/// Query tuning knobs.
///
/// With no `strategy_override`, inputs smaller than [`QueryConfig::BRUTE_FORCE_THRESHOLD`] are
/// scanned exhaustively and larger ones go through divide and conquer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct QueryConfig {
    pub strategy_override: Option<SearchStrategy>,
    /// Partitions of at most this many points are solved by brute force. Clamped to at least 2.
    pub leaf_size: usize,
    /// Run the two halves of a partition on the rayon pool.
    pub parallel: bool,
    /// Smallest partition that is split across threads when `parallel` is set.
    pub parallel_cutoff: usize,
}

impl QueryConfig {
    pub const BRUTE_FORCE_THRESHOLD: usize = 64;
    pub const DEFAULT_LEAF_SIZE: usize = 3;
    pub const DEFAULT_PARALLEL_CUTOFF: usize = 4096;

    pub fn with_strategy(strategy: SearchStrategy) -> Self {
        QueryConfig { strategy_override: Some(strategy), ..QueryConfig::default() }
    }

    /// The strategy a query over `n` points will use.
    pub fn resolve_strategy(&self, n: usize) -> SearchStrategy {
        match self.strategy_override {
            Some(strategy) => strategy,
            None if n < Self::BRUTE_FORCE_THRESHOLD => SearchStrategy::BruteForce,
            None => SearchStrategy::DivideAndConquer,
        }
    }

    pub fn leaf_size(&self) -> usize {
        self.leaf_size.max(2)
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        QueryConfig {
            strategy_override: None,
            leaf_size: Self::DEFAULT_LEAF_SIZE,
            parallel: false,
            parallel_cutoff: Self::DEFAULT_PARALLEL_CUTOFF,
        }
    }
}

/// The answer to a query: pairs in ascending order of distance, ties broken by input position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResultSet {
    pairs: Vec<PairCandidate>,
}

impl ResultSet {
    pub(crate) fn from_sorted(pairs: Vec<PairCandidate>) -> Self {
        debug_assert!(pairs.windows(2).all(|w| w[0] < w[1]));
        ResultSet { pairs }
    }

    pub fn pairs(&self) -> &[PairCandidate] {
        &self.pairs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PairCandidate> {
        self.pairs.iter()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn into_vec(self) -> Vec<PairCandidate> {
        self.pairs
    }

    /// `((x1, y1), (x2, y2), distance)` triples, in result order.
    pub fn to_tuples(&self) -> Vec<((i32, i32), (i32, i32), f64)> {
        self.pairs.iter().map(PairCandidate::to_tuple).collect()
    }
}

impl IntoIterator for ResultSet {
    type Item = PairCandidate;
    type IntoIter = std::vec::IntoIter<PairCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a PairCandidate;
    type IntoIter = std::slice::Iter<'a, PairCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

/// Returns the `k` closest pairs of distinct input points.
///
/// Fails with `EmptyInput` for fewer than 2 points and with `InvalidK` unless
/// `1 <= k <= n * (n - 1) / 2`. Both strategies return identical results.
pub fn closest_k_pairs(points: &[Point], k: usize, strategy: SearchStrategy) -> Result<ResultSet> {
    closest_k_pairs_with_config(points, k, &QueryConfig::with_strategy(strategy))
}

pub fn closest_k_pairs_with_config(points: &[Point], k: usize, config: &QueryConfig) -> Result<ResultSet> {
    let strategy = config.resolve_strategy(points.len());
    debug!(n = points.len(), k, %strategy, "closest pairs query");
    let result = match strategy {
        SearchStrategy::BruteForce => BruteForceSelector::query(points, k),
        SearchStrategy::DivideAndConquer => DivideAndConquerEngine::query_with_config(points, k, config),
    }?;
    debug!(returned = result.len(), "closest pairs query done");
    Ok(result)
}
