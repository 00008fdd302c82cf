use crate::models::common::Money;

/// A label of the base price line.
pub const BASE_PRICE_LABEL: &str = "Base Price";
/// A label of the distance fee line.
pub const DISTANCE_FEE_LABEL: &str = "Distance Fee";
/// A label of the demand surcharge line.
pub const DEMAND_SURCHARGE_LABEL: &str = "High Demand Surcharge";
/// A label of the time surcharge line.
pub const TIME_SURCHARGE_LABEL: &str = "Time-based Surcharge";

/// A single line of the price breakdown.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceLine {
    /// Line label.
    pub label: String,
    /// Line amount.
    pub amount: Money,
}

/// An itemized delivery price.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceQuote {
    /// A price of the cylinder itself.
    pub base_price: Money,
    /// A fee for delivery outside of the free radius.
    pub distance_fee: Money,
    /// A surcharge applied on high demand.
    pub demand_surcharge: Money,
    /// A sum of weekend, night and peak hours surcharges.
    pub time_surcharge: Money,
    /// A total price, always a sum of the components above.
    pub total_price: Money,
    /// Non-zero components in fixed order, base price is always first.
    pub breakdown: Vec<PriceLine>,
}

impl PriceQuote {
    /// Creates a new quote from its components computing total and breakdown.
    pub fn new(base_price: Money, distance_fee: Money, demand_surcharge: Money, time_surcharge: Money) -> Self {
        let breakdown = std::iter::once((BASE_PRICE_LABEL, base_price))
            .chain(
                [
                    (DISTANCE_FEE_LABEL, distance_fee),
                    (DEMAND_SURCHARGE_LABEL, demand_surcharge),
                    (TIME_SURCHARGE_LABEL, time_surcharge),
                ]
                .into_iter()
                .filter(|(_, amount)| *amount > 0.),
            )
            .map(|(label, amount)| PriceLine { label: label.to_string(), amount })
            .collect();

        Self {
            base_price,
            distance_fee,
            demand_surcharge,
            time_surcharge,
            total_price: base_price + distance_fee + demand_surcharge + time_surcharge,
            breakdown,
        }
    }
}
