//! Contains the route sequencer which orders delivery stops into a low distance route.
//!
//! Sequencing is done in two phases:
//! - a nearest neighbor construction builds an initial tour starting from the depot
//! - a 2-opt local search removes crossing edges until a local optimum is reached
//!
//! The sequencer is stateless: it keeps no cache and every call recomputes the route from scratch.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use lpg_core::prelude::*;
//!
//! let depot = Location::new(-1.2921, 36.8219, "Green Wells Warehouse - Nairobi");
//! let stops = vec![Location::new_stop(-1.30, 36.83, "Kilimani", "order1")];
//! let sequencer = RouteSequencer::new(RoutingConfig::default(), Arc::new(Environment::new_silent()));
//!
//! let route = sequencer.sequence(&depot, &stops);
//!
//! assert_eq!(route.visit_order, vec![0]);
//! assert!(route.total_distance_km > 1. && route.total_distance_km < 1.5);
//! ```

#[cfg(test)]
#[path = "../../tests/unit/solver/sequencer_test.rs"]
mod sequencer_test;

use crate::construction::create_nearest_neighbor_tour;
use crate::models::common::{Coordinate, Distance, Location, Money};
use crate::models::{DEPOT_INDEX, Route, Tour};
use crate::refinement::ExchangeTwoOpt;
use crate::utils::{Environment, Float};
use std::sync::Arc;

/// Specifies conversion rates used to derive time and fuel estimates from distance.
#[derive(Clone, Debug, PartialEq)]
pub struct RoutingConfig {
    /// Average travel speed in km/h.
    pub average_speed_kmh: Float,
    /// Fuel efficiency in km per liter.
    pub fuel_efficiency_km_per_liter: Float,
    /// Fuel price in currency units per liter.
    pub fuel_price_per_liter: Money,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self { average_speed_kmh: 30., fuel_efficiency_km_per_liter: 10., fuel_price_per_liter: 150. }
    }
}

impl RoutingConfig {
    /// Estimates travel time in whole minutes, rounded up.
    pub fn estimate_minutes(&self, distance: Distance) -> u32 {
        (distance / self.average_speed_kmh * 60.).ceil() as u32
    }

    /// Estimates fuel cost, rounded up to the whole currency unit.
    pub fn estimate_fuel_cost(&self, distance: Distance) -> Money {
        (distance / self.fuel_efficiency_km_per_liter * self.fuel_price_per_liter).ceil()
    }
}

/// Orders a set of delivery stops into a low distance route starting from the depot.
pub struct RouteSequencer {
    config: RoutingConfig,
    environment: Arc<Environment>,
}

impl RouteSequencer {
    /// Creates a new instance of `RouteSequencer`.
    pub fn new(config: RoutingConfig, environment: Arc<Environment>) -> Self {
        Self { config, environment }
    }

    /// Sequences stops using nearest neighbor construction followed by 2-opt improvement.
    /// Always returns a valid route: zero stops produce a route which contains only the depot.
    pub fn sequence(&self, depot: &Location, stops: &[Location]) -> Route {
        let points = get_points(depot, stops);
        let mut tour = create_nearest_neighbor_tour(points.as_slice());
        let initial_distance = tour.distance(points.as_slice());

        let swaps = ExchangeTwoOpt::default().improve(points.as_slice(), &mut tour);
        let route = self.create_route(depot, stops, &tour, points.as_slice());

        (self.environment.logger)(&format!(
            "sequenced {} stops: nearest neighbor {:.2}km, 2-opt applied {} swaps, final {:.2}km",
            stops.len(),
            initial_distance,
            swaps,
            route.total_distance_km
        ));

        route
    }

    /// Sequences stops using nearest neighbor construction only.
    pub fn sequence_greedy(&self, depot: &Location, stops: &[Location]) -> Route {
        let points = get_points(depot, stops);
        let tour = create_nearest_neighbor_tour(points.as_slice());

        self.create_route(depot, stops, &tour, points.as_slice())
    }

    fn create_route(&self, depot: &Location, stops: &[Location], tour: &Tour, points: &[Coordinate]) -> Route {
        let total_distance_km = tour.distance(points);

        Route {
            stops: tour
                .indices()
                .iter()
                .map(|&idx| if idx == DEPOT_INDEX { depot.clone() } else { stops[idx - 1].clone() })
                .collect(),
            total_distance_km,
            estimated_minutes: self.config.estimate_minutes(total_distance_km),
            estimated_fuel_cost: self.config.estimate_fuel_cost(total_distance_km),
            visit_order: tour.visit_order(),
        }
    }
}

fn get_points(depot: &Location, stops: &[Location]) -> Vec<Coordinate> {
    std::iter::once(depot).chain(stops.iter()).map(|location| location.coordinate()).collect()
}
