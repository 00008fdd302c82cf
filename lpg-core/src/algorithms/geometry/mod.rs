//! Great-circle distance calculations.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/geometry/haversine_test.rs"]
mod haversine_test;

use crate::models::common::{Coordinate, Distance};
use crate::utils::Float;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: Float = 6371.;

/// Gets distance in kilometers between two points using haversine formula.
/// Coordinates are not validated, NaN values propagate to the result.
pub fn get_haversine_distance(p1: &Coordinate, p2: &Coordinate) -> Distance {
    let d_lat = degree_rad(p2.lat - p1.lat);
    let d_lng = degree_rad(p2.lng - p1.lng);

    let lat1 = degree_rad(p1.lat);
    let lat2 = degree_rad(p2.lat);

    // NOTE cosines are multiplied first to keep the result symmetric on swapped arguments
    let a = (d_lat / 2.).sin() * (d_lat / 2.).sin()
        + (d_lng / 2.).sin() * (d_lng / 2.).sin() * (lat1.cos() * lat2.cos());
    let c = 2. * a.sqrt().atan2((1. - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Converts degrees to radians.
#[inline(always)]
fn degree_rad(degrees: Float) -> Float {
    std::f64::consts::PI * degrees / 180.
}
