#[cfg(test)]
#[path = "../../tests/unit/pricing/tariff_test.rs"]
mod tariff_test;

use crate::models::common::{Distance, HourWindow, Money};
use crate::utils::{Float, InvalidInput};

/// A demand band: demand levels up to `up_to` (inclusive) are charged with `rate` of base price.
#[derive(Clone, Debug, PartialEq)]
pub struct DemandTier {
    /// Inclusive upper bound of demand level.
    pub up_to: Float,
    /// A share of base price, e.g. `0.05` is 5%.
    pub rate: Float,
}

/// Specifies prices and surcharge rules.
#[derive(Clone, Debug, PartialEq)]
pub struct TariffConfig {
    /// Base prices by cylinder size label.
    pub base_prices: Vec<(String, Money)>,
    /// A radius in km within which delivery is free.
    pub free_radius_km: Distance,
    /// A fee charged per km outside of the free radius.
    pub per_km_rate: Money,
    /// Demand bands sorted by `up_to` in ascending order.
    pub demand_tiers: Vec<DemandTier>,
    /// A rate applied when demand is above the last tier.
    pub demand_top_rate: Float,
    /// A rate applied on Saturday and Sunday.
    pub weekend_rate: Float,
    /// A rate applied within night hours.
    pub night_rate: Float,
    /// Night hours, can wrap around midnight.
    pub night_hours: HourWindow,
    /// A rate applied within peak hours on weekdays.
    pub peak_rate: Float,
    /// Weekday peak hours.
    pub peak_hours: HourWindow,
}

impl Default for TariffConfig {
    fn default() -> Self {
        Self {
            base_prices: vec![("6KG".to_string(), 950.), ("13KG".to_string(), 1850.), ("35KG".to_string(), 4200.)],
            free_radius_km: 5.,
            per_km_rate: 20.,
            demand_tiers: vec![
                DemandTier { up_to: 30., rate: 0. },
                DemandTier { up_to: 60., rate: 0.05 },
                DemandTier { up_to: 80., rate: 0.1 },
            ],
            demand_top_rate: 0.2,
            weekend_rate: 0.05,
            night_rate: 0.1,
            night_hours: HourWindow::new(20, 6),
            peak_rate: 0.08,
            peak_hours: HourWindow::new(17, 20),
        }
    }
}

impl TariffConfig {
    /// Returns base price for given cylinder size or `InvalidInput` if size is unknown.
    pub fn get_base_price(&self, cylinder_size: &str) -> Result<Money, InvalidInput> {
        self.base_prices.iter().find(|(size, _)| size == cylinder_size).map(|(_, price)| *price).ok_or_else(|| {
            InvalidInput::new(
                "cylinder size",
                cylinder_size,
                format!("expected one of: {}", self.get_cylinder_sizes().join(", ")),
            )
        })
    }

    /// Returns all known cylinder sizes in tariff order.
    pub fn get_cylinder_sizes(&self) -> Vec<&str> {
        self.base_prices.iter().map(|(size, _)| size.as_str()).collect()
    }

    /// Returns a demand rate for given demand level.
    pub fn get_demand_rate(&self, demand_level: Float) -> Float {
        self.demand_tiers
            .iter()
            .find(|tier| demand_level <= tier.up_to)
            .map_or(self.demand_top_rate, |tier| tier.rate)
    }
}
