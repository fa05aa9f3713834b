//! This module contains the point and pair types shared by both search strategies.

use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A planar point with integer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// Exact squared Euclidean distance. Deltas are widened to `i64` and the sum to `u128`,
    /// so no pair of `i32` points can overflow.
    pub fn squared_distance(&self, other: &Point) -> u128 {
        let dx = (self.x as i64 - other.x as i64).unsigned_abs() as u128;
        let dy = (self.y as i64 - other.y as i64).unsigned_abs() as u128;
        dx * dx + dy * dy
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (self.squared_distance(other) as f64).sqrt()
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point { x, y }
    }
}

impl From<Point> for (i32, i32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A point tagged with its position in the caller's input.
///
/// The index is the point's identity: two entries with equal coordinates are still
/// different points, and the tie policy orders pairs by these indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexedPoint {
    pub index: usize,
    pub point: Point,
}

impl IndexedPoint {
    /// Tags every point with its input position.
    pub fn index_all(points: &[Point]) -> Vec<IndexedPoint> {
        points
            .iter()
            .enumerate()
            .map(|(index, &point)| IndexedPoint { index, point })
            .collect()
    }
}

/// An unordered pair of two distinct input points.
///
/// `first_index < second_index` always holds. Only the exact squared distance is stored;
/// [`PairCandidate::distance`] derives the Euclidean distance from it.
///
/// Candidates are totally ordered by `(squared distance, first_index, second_index)`:
/// equal distances go to the pair that comes first in a row-major scan of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PairCandidate {
    pub first: Point,
    pub second: Point,
    pub first_index: usize,
    pub second_index: usize,
    squared: u128,
}

impl PairCandidate {
    /// Builds the candidate for two indexed points, or `None` if both are the same input
    /// entry. Self-pairs are degenerate and never reach an accumulator.
    pub fn between(a: &IndexedPoint, b: &IndexedPoint) -> Option<Self> {
        let (lo, hi) = match a.index.cmp(&b.index) {
            Ordering::Less => (a, b),
            Ordering::Greater => (b, a),
            Ordering::Equal => return None,
        };
        Some(PairCandidate {
            first: lo.point,
            second: hi.point,
            first_index: lo.index,
            second_index: hi.index,
            squared: lo.point.squared_distance(&hi.point),
        })
    }

    pub fn squared_distance(&self) -> u128 {
        self.squared
    }

    pub fn distance(&self) -> f64 {
        (self.squared as f64).sqrt()
    }

    /// The `((x1, y1), (x2, y2), distance)` triple handed across the library boundary.
    pub fn to_tuple(&self) -> ((i32, i32), (i32, i32), f64) {
        (self.first.into(), self.second.into(), self.distance())
    }

    fn sort_key(&self) -> (u128, usize, usize) {
        (self.squared, self.first_index, self.second_index)
    }
}

impl PartialOrd for PairCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PairCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl fmt::Display for PairCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {} distance={:.6}", self.first, self.second, self.distance())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ip(index: usize, x: i32, y: i32) -> IndexedPoint {
        IndexedPoint { index, point: Point::new(x, y) }
    }

    #[test]
    fn test_squared_distance_does_not_overflow_at_extremes() {
        let a = Point::new(i32::MIN, i32::MIN);
        let b = Point::new(i32::MAX, i32::MAX);
        let span = (i32::MAX as i64 - i32::MIN as i64) as u128;
        assert_eq!(a.squared_distance(&b), 2 * span * span);
        assert!(a.distance(&b).is_finite());
    }

    #[test]
    fn test_between_rejects_self_pair() {
        let p = ip(4, 1, 1);
        assert!(PairCandidate::between(&p, &p).is_none());
    }

    #[test]
    fn test_between_accepts_duplicate_coordinates() {
        let pair = PairCandidate::between(&ip(3, 0, 0), &ip(1, 0, 0)).expect("distinct entries form a pair");
        assert_eq!(pair.first_index, 1);
        assert_eq!(pair.second_index, 3);
        assert_eq!(pair.squared_distance(), 0);
        assert_eq!(pair.distance(), 0.0);
    }

    #[test]
    fn test_ordering_breaks_distance_ties_by_index() {
        let a = PairCandidate::between(&ip(0, 0, 0), &ip(1, 1, 0)).unwrap();
        let b = PairCandidate::between(&ip(0, 0, 0), &ip(2, 0, 1)).unwrap();
        let c = PairCandidate::between(&ip(1, 1, 0), &ip(2, 0, 1)).unwrap();
        assert_relative_eq!(a.distance(), b.distance());
        assert!(a < b);
        assert!(b < c); // sqrt(2) > 1
        let mut v = vec![c, b, a];
        v.sort();
        assert_eq!(v, vec![a, b, c]);
    }

    #[test]
    fn test_display_formats() {
        let pair = PairCandidate::between(&ip(0, 0, 0), &ip(1, 3, 4)).unwrap();
        assert_eq!(pair.to_string(), "(0, 0), (3, 4) distance=5.000000");
        assert_eq!(pair.to_tuple(), ((0, 0), (3, 4), 5.0));
    }
}
