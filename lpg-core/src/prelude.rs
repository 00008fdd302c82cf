//! This module reimports commonly used types.

pub use crate::models::common::{Coordinate, DeliveryTime, Location};
pub use crate::models::{OrderDraft, PriceLine, PriceQuote, Route};

pub use crate::pricing::{
    DemandEstimator, DemandTier, FixedDemand, PriceCalculator, PricingFactors, TariffConfig, TimeOfDayDemand,
};
pub use crate::solver::{RouteSequencer, RoutingConfig};
pub use crate::tracking::{Arrival, estimate_arrival};

pub use crate::utils::{
    DefaultRandom, Environment, GenericError, GenericResult, InfoLogger, InvalidInput, Random, RepeatableRandom,
};
