//! Contains json models used to read requests and write results.

#[cfg(test)]
#[path = "../../tests/unit/extensions/format_test.rs"]
mod format_test;

use lpg_core::models::common::{DeliveryTime, Location};
use lpg_core::models::{PriceQuote, Route};
use lpg_core::prelude::{Arrival, GenericError, GenericResult, InvalidInput};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Read, Write};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// A location in json format.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JsonLocation {
    /// An order id, depot has none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
    /// Address.
    #[serde(default)]
    pub address: String,
}

impl JsonLocation {
    /// Converts json location to validated core location.
    pub fn to_location(&self) -> Result<Location, InvalidInput> {
        let location = Location {
            latitude: self.lat,
            longitude: self.lng,
            address: self.address.clone(),
            stop_id: self.id.clone(),
        };

        location.validate().map(|_| location)
    }
}

impl From<&Location> for JsonLocation {
    fn from(location: &Location) -> Self {
        Self {
            id: location.stop_id.clone(),
            lat: location.latitude,
            lng: location.longitude,
            address: location.address.clone(),
        }
    }
}

/// A route sequencing request.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    /// A depot, if omitted, configured one is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depot: Option<JsonLocation>,
    /// Delivery stops.
    pub stops: Vec<JsonLocation>,
}

impl RouteRequest {
    /// Returns validated delivery stops.
    pub fn get_stops(&self) -> GenericResult<Vec<Location>> {
        self.stops
            .iter()
            .enumerate()
            .map(|(idx, stop)| stop.to_location().map_err(|err| format!("stop at index {idx}: {err}").into()))
            .collect()
    }
}

/// A sequenced route.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouteResponse {
    /// Total distance in km, rounded to two decimals.
    pub total_distance: f64,
    /// Estimated time in minutes.
    pub estimated_time: u32,
    /// Estimated fuel cost.
    pub estimated_fuel_cost: f64,
    /// Indices of request stops in visiting order.
    pub sequence: Vec<usize>,
    /// Locations in visiting order starting from the depot.
    pub locations: Vec<JsonLocation>,
}

impl From<&Route> for RouteResponse {
    fn from(route: &Route) -> Self {
        Self {
            total_distance: round_to_cents(route.total_distance_km),
            estimated_time: route.estimated_minutes,
            estimated_fuel_cost: route.estimated_fuel_cost,
            sequence: route.visit_order.clone(),
            locations: route.stops.iter().map(JsonLocation::from).collect(),
        }
    }
}

/// A single line of price breakdown.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct JsonPriceLine {
    /// Label.
    pub label: String,
    /// Amount.
    pub amount: f64,
}

/// A price quote.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    /// An order id, if quote was calculated for an order from a batch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Cylinder size.
    pub cylinder_size: String,
    /// Distance from the depot in km, rounded to two decimals.
    pub distance: f64,
    /// Base price.
    pub base_price: f64,
    /// Distance fee.
    pub distance_fee: f64,
    /// Demand surcharge.
    pub demand_surcharge: f64,
    /// Time surcharge.
    pub time_surcharge: f64,
    /// Total price.
    pub total_price: f64,
    /// Non-zero price lines.
    pub breakdown: Vec<JsonPriceLine>,
}

impl QuoteResponse {
    /// Creates a new quote response.
    pub fn new(order_id: Option<String>, cylinder_size: &str, distance_km: f64, quote: &PriceQuote) -> Self {
        Self {
            order_id,
            cylinder_size: cylinder_size.to_string(),
            distance: round_to_cents(distance_km),
            base_price: quote.base_price,
            distance_fee: quote.distance_fee,
            demand_surcharge: quote.demand_surcharge,
            time_surcharge: quote.time_surcharge,
            total_price: quote.total_price,
            breakdown: quote
                .breakdown
                .iter()
                .map(|line| JsonPriceLine { label: line.label.clone(), amount: line.amount })
                .collect(),
        }
    }
}

/// An order which cannot be quoted.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderError {
    /// Order id.
    pub order_id: String,
    /// A reason of failure.
    pub reason: String,
}

/// Quotes of an order batch.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct BatchQuoteResponse {
    /// Successfully quoted orders in input order.
    pub quotes: Vec<QuoteResponse>,
    /// Orders which cannot be quoted.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub errors: Vec<OrderError>,
}

/// An arrival estimate.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArrivalResponse {
    /// Distance in km, rounded to two decimals.
    pub distance: f64,
    /// Estimated time in minutes.
    pub estimated_time: u32,
}

impl From<&Arrival> for ArrivalResponse {
    fn from(arrival: &Arrival) -> Self {
        Self { distance: round_to_cents(arrival.distance_km), estimated_time: arrival.estimated_minutes }
    }
}

/// Reads route request from json.
pub fn read_route_request<R: Read>(reader: BufReader<R>) -> GenericResult<RouteRequest> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize route request: '{err}'").into())
}

/// Writes value as pretty json.
pub fn write_json<W: Write, T: Serialize>(writer: BufWriter<W>, value: &T) -> GenericResult<()> {
    let mut writer = writer;

    serde_json::to_writer_pretty(&mut writer, value)
        .map_err(|err| GenericError::from(format!("cannot serialize result: '{err}'")))?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    Ok(())
}

/// Parses delivery time from RFC3339 date time, e.g. `2024-05-15T13:00:00+03:00`. Hour and
/// weekday are taken in the offset specified in the string.
pub fn parse_delivery_time(value: &str) -> GenericResult<DeliveryTime> {
    OffsetDateTime::parse(value, &Rfc3339)
        .map(|date_time| to_delivery_time(&date_time))
        .map_err(|err| format!("cannot parse delivery time '{value}': '{err}'").into())
}

/// Returns current delivery time in UTC.
pub fn get_current_delivery_time() -> DeliveryTime {
    to_delivery_time(&OffsetDateTime::now_utc())
}

fn to_delivery_time(date_time: &OffsetDateTime) -> DeliveryTime {
    DeliveryTime::new(date_time.hour(), date_time.weekday().number_days_from_sunday())
}

/// Rounds value to two decimals for display purpose.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.).round() / 100.
}
