//! Core crate contains the building blocks used to deliver LPG cylinders: a great-circle distance
//! function, a delivery route sequencer and a dynamic price calculator.
//!
//! All computations are pure: nothing is cached or persisted, callers recompute routes and quotes
//! whenever their inputs change.
//!
//! # Examples
//!
//! ```
//! use lpg_core::prelude::*;
//!
//! let calculator = PriceCalculator::new(TariffConfig::default());
//! let quote = calculator
//!     .calculate(&PricingFactors {
//!         cylinder_size: "13KG".to_string(),
//!         distance_km: 1.3,
//!         time: DeliveryTime::new(13, 3),
//!         demand_level: 30.,
//!     })
//!     .unwrap();
//!
//! assert_eq!(quote.total_price, 1850.);
//! assert_eq!(quote.breakdown.len(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/discovery/mod.rs"]
mod discovery;

pub mod algorithms;
pub mod construction;
pub mod models;
pub mod prelude;
pub mod pricing;
pub mod refinement;
pub mod solver;
pub mod tracking;
pub mod utils;
