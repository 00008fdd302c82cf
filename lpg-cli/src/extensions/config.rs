//! Contains functionality to read a config file and map it onto core settings.

#[cfg(test)]
#[path = "../../tests/unit/extensions/config_test.rs"]
mod config_test;

use crate::extensions::format::JsonLocation;
use lpg_core::models::common::{HourWindow, Location};
use lpg_core::prelude::*;
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// An address of the default depot.
pub const DEFAULT_DEPOT_ADDRESS: &str = "Green Wells Warehouse - Nairobi";

/// A default max demand jitter.
pub const DEFAULT_DEMAND_JITTER: f64 = 10.;

/// A routing and pricing configuration.
#[derive(Clone, Default, Deserialize, Debug)]
pub struct Config {
    /// Specifies the depot all deliveries start from.
    pub depot: Option<JsonLocation>,
    /// Specifies routing estimates.
    pub routing: Option<RoutingSettings>,
    /// Specifies tariff.
    pub tariff: Option<TariffSettings>,
    /// Specifies how demand level is estimated.
    pub demand: Option<DemandType>,
}

/// A routing estimates configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RoutingSettings {
    /// Average speed in km/h. Default is 30.
    pub average_speed: Option<f64>,
    /// Fuel efficiency in km/l. Default is 10.
    pub fuel_efficiency: Option<f64>,
    /// Fuel price per liter. Default is 150.
    pub fuel_price: Option<f64>,
}

/// A cylinder price.
#[derive(Clone, Deserialize, Debug)]
pub struct BasePriceSettings {
    /// Cylinder size label.
    pub size: String,
    /// Price.
    pub price: f64,
}

/// A demand tier.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DemandTierSettings {
    /// Inclusive upper bound of demand level.
    pub up_to: f64,
    /// A share of base price.
    pub rate: f64,
}

/// A tariff configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TariffSettings {
    /// Cylinder prices in tariff order.
    pub base_prices: Option<Vec<BasePriceSettings>>,
    /// Free delivery radius in km. Default is 5.
    pub free_radius: Option<f64>,
    /// Fee per km outside of the free radius. Default is 20.
    pub per_km_rate: Option<f64>,
    /// Demand tiers sorted by upper bound.
    pub demand_tiers: Option<Vec<DemandTierSettings>>,
    /// A rate above the last tier. Default is 0.2.
    pub demand_top_rate: Option<f64>,
    /// Default is 0.05.
    pub weekend_rate: Option<f64>,
    /// Default is 0.1.
    pub night_rate: Option<f64>,
    /// Night hours as `[start, end)`, can wrap around midnight.
    pub night_hours: Option<[u8; 2]>,
    /// Default is 0.08.
    pub peak_rate: Option<f64>,
    /// Weekday peak hours as `[start, end)`.
    pub peak_hours: Option<[u8; 2]>,
}

/// A demand estimator configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "type")]
pub enum DemandType {
    /// A fixed demand level.
    #[serde(rename(deserialize = "fixed"))]
    Fixed {
        /// Demand level in `[0, 100]` range.
        level: f64,
    },

    /// A time of day based demand with random jitter.
    #[serde(rename(deserialize = "time-of-day"))]
    TimeOfDay {
        /// Max jitter. Default is 10.
        jitter: Option<f64>,
    },
}

impl Config {
    /// Returns configured depot or the default one.
    pub fn get_depot(&self) -> GenericResult<Location> {
        match &self.depot {
            Some(depot) => depot.to_location().map_err(|err| format!("depot: {err}").into()),
            None => Ok(Location::new(-1.2921, 36.8219, DEFAULT_DEPOT_ADDRESS)),
        }
    }

    /// Creates routing config.
    pub fn create_routing_config(&self) -> GenericResult<RoutingConfig> {
        let default = RoutingConfig::default();

        let Some(routing) = &self.routing else {
            return Ok(default);
        };

        let config = RoutingConfig {
            average_speed_kmh: routing.average_speed.unwrap_or(default.average_speed_kmh),
            fuel_efficiency_km_per_liter: routing.fuel_efficiency.unwrap_or(default.fuel_efficiency_km_per_liter),
            fuel_price_per_liter: routing.fuel_price.unwrap_or(default.fuel_price_per_liter),
        };

        check_positive("averageSpeed", config.average_speed_kmh)?;
        check_positive("fuelEfficiency", config.fuel_efficiency_km_per_liter)?;
        check_non_negative("fuelPrice", config.fuel_price_per_liter)?;

        Ok(config)
    }

    /// Creates tariff config.
    pub fn create_tariff(&self) -> GenericResult<TariffConfig> {
        let default = TariffConfig::default();

        let Some(tariff) = &self.tariff else {
            return Ok(default);
        };

        let config = TariffConfig {
            base_prices: tariff.base_prices.as_ref().map_or(default.base_prices, |prices| {
                prices.iter().map(|base| (base.size.clone(), base.price)).collect()
            }),
            free_radius_km: tariff.free_radius.unwrap_or(default.free_radius_km),
            per_km_rate: tariff.per_km_rate.unwrap_or(default.per_km_rate),
            demand_tiers: tariff.demand_tiers.as_ref().map_or(default.demand_tiers, |tiers| {
                tiers.iter().map(|tier| DemandTier { up_to: tier.up_to, rate: tier.rate }).collect()
            }),
            demand_top_rate: tariff.demand_top_rate.unwrap_or(default.demand_top_rate),
            weekend_rate: tariff.weekend_rate.unwrap_or(default.weekend_rate),
            night_rate: tariff.night_rate.unwrap_or(default.night_rate),
            night_hours: create_hour_window("nightHours", tariff.night_hours)?.unwrap_or(default.night_hours),
            peak_rate: tariff.peak_rate.unwrap_or(default.peak_rate),
            peak_hours: create_hour_window("peakHours", tariff.peak_hours)?.unwrap_or(default.peak_hours),
        };

        validate_tariff(&config)?;

        Ok(config)
    }

    /// Creates demand estimator.
    pub fn create_demand_estimator(
        &self,
        random: Arc<dyn Random + Send + Sync>,
    ) -> GenericResult<Box<dyn DemandEstimator + Send + Sync>> {
        let estimator: Box<dyn DemandEstimator + Send + Sync> = match &self.demand {
            Some(DemandType::Fixed { level }) => {
                check_non_negative("demand level", *level)?;
                Box::new(FixedDemand::new(*level))
            }
            Some(DemandType::TimeOfDay { jitter }) => {
                let jitter = jitter.unwrap_or(DEFAULT_DEMAND_JITTER);
                check_non_negative("demand jitter", jitter)?;
                Box::new(TimeOfDayDemand::new(random, jitter))
            }
            None => Box::new(TimeOfDayDemand::new(random, DEFAULT_DEMAND_JITTER)),
        };

        Ok(estimator)
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<Config> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

fn create_hour_window(name: &'static str, hours: Option<[u8; 2]>) -> GenericResult<Option<HourWindow>> {
    match hours {
        Some([start, end]) if start < 24 && end <= 24 => Ok(Some(HourWindow::new(start, end))),
        Some([start, end]) => {
            Err(InvalidInput::new(name, format!("[{start}, {end}]"), "expected hours in [0, 24] range").into())
        }
        None => Ok(None),
    }
}

fn validate_tariff(tariff: &TariffConfig) -> GenericResult<()> {
    if tariff.base_prices.is_empty() {
        return Err("tariff must have at least one base price".into());
    }

    tariff.base_prices.iter().try_for_each(|(_, price)| check_non_negative("base price", *price))?;

    let is_sorted = tariff.demand_tiers.windows(2).all(|pair| pair[0].up_to < pair[1].up_to);
    if !is_sorted {
        return Err("demand tiers must be sorted by 'upTo' in ascending order".into());
    }

    check_non_negative("freeRadius", tariff.free_radius_km)?;
    check_non_negative("perKmRate", tariff.per_km_rate)?;

    tariff
        .demand_tiers
        .iter()
        .map(|tier| tier.rate)
        .chain([tariff.demand_top_rate, tariff.weekend_rate, tariff.night_rate, tariff.peak_rate])
        .try_for_each(|rate| check_non_negative("rate", rate))
}

fn check_positive(name: &'static str, value: f64) -> GenericResult<()> {
    if value.is_finite() && value > 0. {
        Ok(())
    } else {
        Err(InvalidInput::new(name, value.to_string(), "expected positive value").into())
    }
}

fn check_non_negative(name: &'static str, value: f64) -> GenericResult<()> {
    if value.is_finite() && value >= 0. {
        Ok(())
    } else {
        Err(InvalidInput::new(name, value.to_string(), "expected non-negative value").into())
    }
}
