#[cfg(test)]
#[path = "../../tests/unit/pricing/calculator_test.rs"]
mod calculator_test;

use crate::algorithms::geometry::get_haversine_distance;
use crate::models::common::{Coordinate, DeliveryTime, Distance, Location, Money};
use crate::models::{OrderDraft, PriceQuote};
use crate::pricing::{DemandEstimator, TariffConfig};
use crate::utils::{Float, InvalidInput, parallel_collect};

/// Specifies everything what influences the price of a single delivery.
#[derive(Clone, Debug, PartialEq)]
pub struct PricingFactors {
    /// Cylinder size label.
    pub cylinder_size: String,
    /// Distance between the depot and the customer in km.
    pub distance_km: Distance,
    /// Requested delivery time.
    pub time: DeliveryTime,
    /// Demand level in `[0, 100]` range.
    pub demand_level: Float,
}

/// Calculates itemized delivery prices using a tariff.
pub struct PriceCalculator {
    tariff: TariffConfig,
}

impl PriceCalculator {
    /// Creates a new instance of `PriceCalculator`.
    pub fn new(tariff: TariffConfig) -> Self {
        Self { tariff }
    }

    /// Returns the tariff used by calculator.
    pub fn tariff(&self) -> &TariffConfig {
        &self.tariff
    }

    /// Calculates a price quote. Fails only when cylinder size is not in the tariff.
    pub fn calculate(&self, factors: &PricingFactors) -> Result<PriceQuote, InvalidInput> {
        let base_price = self.tariff.get_base_price(factors.cylinder_size.as_str())?;

        Ok(PriceQuote::new(
            base_price,
            self.get_distance_fee(factors.distance_km),
            self.get_demand_surcharge(base_price, factors.demand_level),
            self.get_time_surcharge(base_price, &factors.time),
        ))
    }

    /// Calculates a price for an order delivered from `depot` to `customer` at given time, using
    /// estimator to get the current demand level.
    pub fn quote_order(
        &self,
        cylinder_size: &str,
        customer: &Coordinate,
        depot: &Coordinate,
        time: DeliveryTime,
        estimator: &dyn DemandEstimator,
    ) -> Result<PriceQuote, InvalidInput> {
        self.calculate(&PricingFactors {
            cylinder_size: cylinder_size.to_string(),
            distance_km: get_haversine_distance(depot, customer),
            time,
            demand_level: estimator.estimate(&time),
        })
    }

    /// Calculates prices for many independent orders in parallel. Results keep the order of input.
    ///
    /// Demand levels are estimated sequentially in the order of input before pricing, so a seeded
    /// estimator assigns the same level to the same order regardless of thread scheduling.
    pub fn quote_many(
        &self,
        orders: &[OrderDraft],
        depot: &Location,
        time: DeliveryTime,
        estimator: &dyn DemandEstimator,
    ) -> Vec<Result<PriceQuote, InvalidInput>> {
        let depot = depot.coordinate();
        let orders = orders.iter().map(|order| (order, estimator.estimate(&time))).collect::<Vec<_>>();

        parallel_collect(orders.as_slice(), |(order, demand_level)| {
            self.calculate(&PricingFactors {
                cylinder_size: order.cylinder_size.clone(),
                distance_km: get_haversine_distance(&depot, &order.location.coordinate()),
                time,
                demand_level: *demand_level,
            })
        })
    }

    fn get_distance_fee(&self, distance_km: Distance) -> Money {
        if distance_km <= self.tariff.free_radius_km {
            return 0.;
        }

        ((distance_km - self.tariff.free_radius_km) * self.tariff.per_km_rate).ceil()
    }

    fn get_demand_surcharge(&self, base_price: Money, demand_level: Float) -> Money {
        get_share(base_price, self.tariff.get_demand_rate(demand_level))
    }

    fn get_time_surcharge(&self, base_price: Money, time: &DeliveryTime) -> Money {
        let tariff = &self.tariff;

        [
            (time.is_weekend(), tariff.weekend_rate),
            (tariff.night_hours.contains(time), tariff.night_rate),
            (time.is_weekday() && tariff.peak_hours.contains(time), tariff.peak_rate),
        ]
        .into_iter()
        .filter(|(applies, _)| *applies)
        .map(|(_, rate)| get_share(base_price, rate))
        .sum()
    }
}

/// Returns a share of amount rounded up to the whole currency unit.
fn get_share(amount: Money, rate: Float) -> Money {
    (amount * rate).ceil()
}
