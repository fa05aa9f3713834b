//! Random point sets for drivers, benchmarks and tests.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::common_types::Point;

/// Dataset sizes the benchmark drivers draw from when no size is given.
pub const DEFAULT_SIZE_RANGE: RangeInclusive<usize> = 100_000..=2_000_000;

/// `count` points with both coordinates uniform in `[0, extent)`.
///
/// # Panics
/// Panics if `extent` is not positive.
pub fn random_points<R: Rng>(rng: &mut R, count: usize, extent: i32) -> Vec<Point> {
    assert!(extent > 0, "extent must be positive, got {}", extent);
    (0..count)
        .map(|_| Point::new(rng.gen_range(0..extent), rng.gen_range(0..extent)))
        .collect()
}

/// Picks a dataset size uniformly from `range`.
pub fn random_size<R: Rng>(rng: &mut R, range: RangeInclusive<usize>) -> usize {
    rng.gen_range(range)
}
