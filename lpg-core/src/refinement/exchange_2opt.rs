#[cfg(test)]
#[path = "../../tests/unit/refinement/exchange_2opt_test.rs"]
mod exchange_2opt_test;

use crate::algorithms::geometry::get_haversine_distance;
use crate::models::Tour;
use crate::models::common::{Coordinate, Distance};

/// A minimal gain (in km) for a swap to be considered as an improvement.
const IMPROVEMENT_THRESHOLD: Distance = 1E-9;

/// Implements a classical TSP's two opt swap operation on an open tour which starts at the depot.
/// The depot never takes part in a reversal.
///
/// Each pass scans all `(i, j)` pairs and applies the first improving swap found; passes are
/// repeated until one of them finds no improvement, so the result is a local optimum.
/// For algorithm details, see https://en.wikipedia.org/wiki/2-opt
#[derive(Default)]
pub struct ExchangeTwoOpt {}

impl ExchangeTwoOpt {
    /// Improves the tour in place. Returns amount of applied swaps.
    pub fn improve(&self, points: &[Coordinate], tour: &mut Tour) -> usize {
        let mut swaps = 0;

        while let Some((i, j)) = self.find_first_improvement(points, tour) {
            tour.reverse(i + 1, j);
            swaps += 1;
        }

        swaps
    }

    fn find_first_improvement(&self, points: &[Coordinate], tour: &Tour) -> Option<(usize, usize)> {
        let size = tour.total();
        let distance = |from: usize, to: usize| match (tour.get(from), tour.get(to)) {
            (Some(from), Some(to)) => get_haversine_distance(&points[from], &points[to]),
            _ => unreachable!("tour position is out of range"),
        };

        // NOTE j starts from i + 2 as reversing a single position changes nothing
        (0..size.saturating_sub(3)).find_map(|i| {
            (i + 2..size - 1).find_map(|j| {
                let current = distance(i, i + 1) + distance(j, j + 1);
                let candidate = distance(i, j) + distance(i + 1, j + 1);

                if candidate + IMPROVEMENT_THRESHOLD < current { Some((i, j)) } else { None }
            })
        })
    }
}
