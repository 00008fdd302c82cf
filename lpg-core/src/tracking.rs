//! Estimates how far a driver is from the customer and when the delivery arrives.

#[cfg(test)]
#[path = "../tests/unit/tracking_test.rs"]
mod tracking_test;

use crate::algorithms::geometry::get_haversine_distance;
use crate::models::common::{Coordinate, Distance};
use crate::solver::RoutingConfig;

/// An arrival estimate.
#[derive(Clone, Debug, PartialEq)]
pub struct Arrival {
    /// Straight line distance to the destination in km.
    pub distance_km: Distance,
    /// Estimated time to arrive in minutes.
    pub estimated_minutes: u32,
}

/// Estimates arrival from the driver's current position to the destination.
pub fn estimate_arrival(driver: &Coordinate, destination: &Coordinate, config: &RoutingConfig) -> Arrival {
    let distance_km = get_haversine_distance(driver, destination);

    Arrival { distance_km, estimated_minutes: config.estimate_minutes(distance_km) }
}
