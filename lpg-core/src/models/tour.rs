#[cfg(test)]
#[path = "../../tests/unit/models/tour_test.rs"]
mod tour_test;

use crate::algorithms::geometry::get_haversine_distance;
use crate::models::common::{Coordinate, Distance};

/// Index of the depot within the points used to build a tour.
pub const DEPOT_INDEX: usize = 0;

/// A sequence of point indices which always starts at the depot. Point with index `k > 0`
/// corresponds to the input stop `k - 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tour {
    indices: Vec<usize>,
}

impl Tour {
    /// Creates a tour from point indices, the first one must be the depot.
    pub fn new(indices: Vec<usize>) -> Self {
        assert_eq!(indices.first(), Some(&DEPOT_INDEX), "tour must start at the depot");

        Self { indices }
    }

    /// Returns point index at given tour position.
    pub fn get(&self, position: usize) -> Option<usize> {
        self.indices.get(position).copied()
    }

    /// Returns amount of positions in the tour including the depot.
    pub fn total(&self) -> usize {
        self.indices.len()
    }

    /// Returns all point indices in visiting order.
    pub fn indices(&self) -> &[usize] {
        self.indices.as_slice()
    }

    /// Reverses positions within `[start, end]` inclusive range. The depot cannot be reversed.
    pub fn reverse(&mut self, start: usize, end: usize) {
        assert!(start > DEPOT_INDEX && start <= end && end < self.indices.len());

        self.indices[start..=end].reverse();
    }

    /// Returns zero based input stop indices in visiting order.
    pub fn visit_order(&self) -> Vec<usize> {
        self.indices.iter().skip(1).map(|idx| idx - 1).collect()
    }

    /// Returns a sum of distances between consecutive points.
    pub fn distance(&self, points: &[Coordinate]) -> Distance {
        self.indices.windows(2).map(|pair| get_haversine_distance(&points[pair[0]], &points[pair[1]])).sum()
    }
}
