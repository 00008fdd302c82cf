use crate::models::common::{Distance, Location, Money};

/// Represents a sequenced delivery route which starts at the depot.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    /// Locations in visiting order, the first one is always the depot.
    pub stops: Vec<Location>,
    /// Total travelled distance in kilometers.
    pub total_distance_km: Distance,
    /// Estimated driving time in minutes.
    pub estimated_minutes: u32,
    /// Estimated fuel cost in currency units.
    pub estimated_fuel_cost: Money,
    /// Indices of input stops in visiting order.
    pub visit_order: Vec<usize>,
}

impl Route {
    /// Returns the depot location.
    pub fn depot(&self) -> &Location {
        &self.stops[0]
    }

    /// Returns delivery stops without depot.
    pub fn deliveries(&self) -> &[Location] {
        &self.stops[1..]
    }
}
