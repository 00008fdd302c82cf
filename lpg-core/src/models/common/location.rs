#[cfg(test)]
#[path = "../../../tests/unit/models/common/location_test.rs"]
mod location_test;

use crate::algorithms::geometry::get_haversine_distance;
use crate::models::common::Distance;
use crate::utils::{Float, InvalidInput};

/// Represents a geographic coordinate in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    /// Latitude.
    pub lat: Float,
    /// Longitude.
    pub lng: Float,
}

impl Coordinate {
    /// Creates a new instance of `Coordinate`.
    pub fn new(lat: Float, lng: Float) -> Self {
        Self { lat, lng }
    }

    /// Checks that coordinate is finite and within geographic ranges.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        if !self.lat.is_finite() || !(-90. ..=90.).contains(&self.lat) {
            return Err(InvalidInput::new("latitude", self.lat.to_string(), "expected value in [-90, 90] range"));
        }

        if !self.lng.is_finite() || !(-180. ..=180.).contains(&self.lng) {
            return Err(InvalidInput::new("longitude", self.lng.to_string(), "expected value in [-180, 180] range"));
        }

        Ok(())
    }
}

/// Represents either a depot or a delivery stop tied to an order.
#[derive(Clone, Debug, PartialEq)]
pub struct Location {
    /// Latitude in decimal degrees.
    pub latitude: Float,
    /// Longitude in decimal degrees.
    pub longitude: Float,
    /// A human readable address.
    pub address: String,
    /// An id of the order this stop belongs to, depot has none.
    pub stop_id: Option<String>,
}

impl Location {
    /// Creates a new location without stop id.
    pub fn new(latitude: Float, longitude: Float, address: impl Into<String>) -> Self {
        Self { latitude, longitude, address: address.into(), stop_id: None }
    }

    /// Creates a new delivery stop location.
    pub fn new_stop(latitude: Float, longitude: Float, address: impl Into<String>, stop_id: impl Into<String>) -> Self {
        Self { latitude, longitude, address: address.into(), stop_id: Some(stop_id.into()) }
    }

    /// Returns location's coordinate.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate { lat: self.latitude, lng: self.longitude }
    }

    /// Returns great-circle distance to other location in kilometers.
    pub fn distance_to(&self, other: &Location) -> Distance {
        get_haversine_distance(&self.coordinate(), &other.coordinate())
    }

    /// Checks that location has a valid coordinate.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        self.coordinate().validate()
    }
}
