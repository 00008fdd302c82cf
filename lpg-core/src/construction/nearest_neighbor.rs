#[cfg(test)]
#[path = "../../tests/unit/construction/nearest_neighbor_test.rs"]
mod nearest_neighbor_test;

use crate::algorithms::geometry::get_haversine_distance;
use crate::models::common::{Coordinate, Distance};
use crate::models::{DEPOT_INDEX, Tour};
use crate::utils::compare_floats;
use std::cmp::Ordering;

/// Builds a tour with a greedy nearest neighbor heuristic: starting from the depot (the first point),
/// it always extends the tour to the closest unvisited point.
///
/// Candidates are scanned in their original order and the best one is replaced only on strictly
/// smaller distance, so the first encountered point wins ties and the result is reproducible.
pub fn create_nearest_neighbor_tour(points: &[Coordinate]) -> Tour {
    assert!(!points.is_empty(), "at least the depot is expected");

    let mut unvisited = (1..points.len()).collect::<Vec<_>>();
    let mut indices = Vec::with_capacity(points.len());
    indices.push(DEPOT_INDEX);

    let mut current = DEPOT_INDEX;
    while let Some(position) = find_nearest(points, current, unvisited.as_slice()) {
        current = unvisited.remove(position);
        indices.push(current);
    }

    Tour::new(indices)
}

/// Returns position of the nearest candidate in the `candidates` slice.
fn find_nearest(points: &[Coordinate], current: usize, candidates: &[usize]) -> Option<usize> {
    candidates
        .iter()
        .enumerate()
        .fold(None::<(usize, Distance)>, |best, (position, &candidate)| {
            let distance = get_haversine_distance(&points[current], &points[candidate]);
            match best {
                Some((_, best_distance)) if compare_floats(distance, best_distance) != Ordering::Less => best,
                _ => Some((position, distance)),
            }
        })
        .map(|(position, _)| position)
}
