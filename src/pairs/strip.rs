//! Cross-boundary pairs around a vertical split line.

use super::heap_utils::TopKAccumulator;
use crate::common_types::{IndexedPoint, PairCandidate};

/// The vertical line a partition was split on.
///
/// Points are ordered by `(x, index)`; a point belongs to the left half iff its key is not
/// past the key of the last point of the left half. This is the "ties go left" rule on `x`,
/// made exact for repeated x-coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitLine {
    pub x: i32,
    pub index: usize,
}

impl SplitLine {
    /// The split after `last_left`, the rightmost point of the left half.
    pub fn after(last_left: &IndexedPoint) -> Self {
        SplitLine { x: last_left.point.x, index: last_left.index }
    }

    pub fn is_left(&self, p: &IndexedPoint) -> bool {
        (p.point.x, p.index) <= (self.x, self.index)
    }

    fn squared_offset(&self, p: &IndexedPoint) -> u128 {
        let dx = (p.point.x as i64 - self.x as i64).unsigned_abs() as u128;
        dx * dx
    }
}

/// Returns up to `k` best pairs that straddle `split`, ascending.
///
/// `sorted_y` holds the whole partition in y-order. `bound` is the squared distance a pair
/// must not exceed to matter; `None` means no bound yet. Pairs exactly at the bound are
/// still considered because the tie policy may rank them ahead of what is already held.
pub fn cross_pairs(
    sorted_y: &[IndexedPoint],
    split: SplitLine,
    bound: Option<u128>,
    k: usize,
) -> Vec<PairCandidate> {
    let strip: Vec<(bool, &IndexedPoint)> = sorted_y
        .iter()
        .filter(|p| bound.is_none_or(|b| split.squared_offset(p) <= b))
        .map(|p| (split.is_left(p), p))
        .collect();

    let mut best = TopKAccumulator::new(k);
    for (i, &(a_left, a)) in strip.iter().enumerate() {
        for &(b_left, b) in &strip[i + 1..] {
            // Packing bound: only a constant number of points fit inside the window.
            let dy = (b.point.y as i64 - a.point.y as i64).unsigned_abs() as u128;
            let window = match (bound, best.worst_squared_distance()) {
                (Some(outer), Some(inner)) => Some(outer.min(inner)),
                (outer, inner) => outer.or(inner),
            };
            if window.is_some_and(|w| dy * dy > w) {
                break;
            }
            if a_left == b_left {
                continue;
            }
            if let Some(candidate) = PairCandidate::between(a, b) {
                if bound.is_none_or(|w| candidate.squared_distance() <= w) {
                    best.offer(candidate);
                }
            }
        }
    }
    best.into_sorted_vec()
}

/// Number of points within `bound` of the split line; reported in trace logs.
pub fn strip_width(sorted_y: &[IndexedPoint], split: SplitLine, bound: Option<u128>) -> usize {
    match bound {
        Some(b) => sorted_y.iter().filter(|p| split.squared_offset(p) <= b).count(),
        None => sorted_y.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common_types::Point;

    fn sorted_by_y(coords: &[(i32, i32)]) -> Vec<IndexedPoint> {
        let points: Vec<Point> = coords.iter().copied().map(Point::from).collect();
        let mut indexed = IndexedPoint::index_all(&points);
        indexed.sort_by_key(|p| (p.point.y, p.index));
        indexed
    }

    #[test]
    fn test_split_line_ties_go_left_by_index() {
        let split = SplitLine { x: 5, index: 2 };
        let at = |index, x| IndexedPoint { index, point: Point::new(x, 0) };
        assert!(split.is_left(&at(0, 4)));
        assert!(split.is_left(&at(1, 5)));
        assert!(split.is_left(&at(2, 5)));
        assert!(!split.is_left(&at(3, 5)));
        assert!(!split.is_left(&at(0, 6)));
    }

    #[test]
    fn test_only_cross_pairs_are_reported() {
        // Left: indices 0, 1 (x <= 1). Right: indices 2, 3.
        let sorted_y = sorted_by_y(&[(0, 0), (1, 0), (2, 0), (3, 0)]);
        let split = SplitLine { x: 1, index: 1 };
        let pairs = cross_pairs(&sorted_y, split, None, 10);
        let indices: Vec<(usize, usize)> =
            pairs.iter().map(|p| (p.first_index, p.second_index)).collect();
        assert_eq!(indices, vec![(1, 2), (0, 2), (1, 3), (0, 3)]);
    }

    #[test]
    fn test_bound_filters_strip_and_pairs() {
        let sorted_y = sorted_by_y(&[(0, 0), (9, 0), (10, 0), (20, 0)]);
        let split = SplitLine { x: 9, index: 1 };
        // Only x in [8, 10] survives the strip filter with bound 1.
        assert_eq!(strip_width(&sorted_y, split, Some(1)), 2);
        let pairs = cross_pairs(&sorted_y, split, Some(1), 5);
        assert_eq!(pairs.len(), 1);
        assert_eq!((pairs[0].first_index, pairs[0].second_index), (1, 2));
    }

    #[test]
    fn test_pair_exactly_at_bound_is_kept() {
        let sorted_y = sorted_by_y(&[(0, 0), (3, 4)]);
        let split = SplitLine { x: 0, index: 0 };
        let pairs = cross_pairs(&sorted_y, split, Some(25), 1);
        assert_eq!(pairs.len(), 1);
        assert!(cross_pairs(&sorted_y, split, Some(24), 1).is_empty());
    }

    #[test]
    fn test_y_window_stops_scan_but_keeps_nearby_pairs() {
        let sorted_y = sorted_by_y(&[(0, 0), (1, 1), (0, 50), (1, 51)]);
        let split = SplitLine { x: 0, index: 2 };
        let pairs = cross_pairs(&sorted_y, split, Some(4), 4);
        let indices: Vec<(usize, usize)> =
            pairs.iter().map(|p| (p.first_index, p.second_index)).collect();
        assert_eq!(indices, vec![(0, 1), (2, 3)]);
    }
}
