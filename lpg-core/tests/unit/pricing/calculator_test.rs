use super::*;
use crate::helpers::models::{NAIROBI_DEPOT, test_depot};
use crate::models::{BASE_PRICE_LABEL, DEMAND_SURCHARGE_LABEL, DISTANCE_FEE_LABEL, TIME_SURCHARGE_LABEL};
use crate::pricing::{FixedDemand, TimeOfDayDemand};
use crate::utils::RepeatableRandom;
use std::sync::Arc;

const WEDNESDAY: u8 = 3;
const SATURDAY: u8 = 6;

fn create_factors(size: &str, distance_km: f64, hour: u8, day: u8, demand_level: f64) -> PricingFactors {
    PricingFactors {
        cylinder_size: size.to_string(),
        distance_km,
        time: DeliveryTime::new(hour, day),
        demand_level,
    }
}

fn calculate(factors: PricingFactors) -> PriceQuote {
    PriceCalculator::new(TariffConfig::default()).calculate(&factors).expect("cannot calculate quote")
}

fn get_labels(quote: &PriceQuote) -> Vec<&str> {
    quote.breakdown.iter().map(|line| line.label.as_str()).collect()
}

#[test]
fn can_quote_base_price_only() {
    let quote = calculate(create_factors("13KG", 1.258, 13, WEDNESDAY, 30.));

    assert_eq!(quote.base_price, 1850.);
    assert_eq!(quote.distance_fee, 0.);
    assert_eq!(quote.demand_surcharge, 0.);
    assert_eq!(quote.time_surcharge, 0.);
    assert_eq!(quote.total_price, 1850.);
    assert_eq!(get_labels(&quote), vec![BASE_PRICE_LABEL]);
}

parameterized_test! {can_calculate_distance_fee, (distance_km, expected), {
    assert_eq!(calculate(create_factors("6KG", distance_km, 13, WEDNESDAY, 0.)).distance_fee, expected);
}}

can_calculate_distance_fee! {
    case01_inside_radius: (1., 0.),
    case02_on_radius: (5., 0.),
    case03_one_km_outside: (6., 20.),
    case04_fraction_rounded_up: (5.01, 1.),
    case05_far: (12.34, 147.),
}

parameterized_test! {can_calculate_demand_surcharge, (size, demand_level, expected), {
    assert_eq!(calculate(create_factors(size, 0., 13, WEDNESDAY, demand_level)).demand_surcharge, expected);
}}

can_calculate_demand_surcharge! {
    case01_zero: ("13KG", 0., 0.),
    case02_low_bound: ("13KG", 30., 0.),
    case03_moderate: ("13KG", 30.5, 93.),
    case04_moderate_bound: ("13KG", 60., 93.),
    case05_high: ("13KG", 75., 185.),
    case06_high_bound: ("13KG", 80., 185.),
    case07_surge: ("13KG", 81., 370.),
    case08_surge_max: ("35KG", 100., 840.),
    case09_small_moderate: ("6KG", 45., 48.),
}

parameterized_test! {can_calculate_time_surcharge, (hour, day, expected), {
    assert_eq!(calculate(create_factors("13KG", 0., hour, day, 0.)).time_surcharge, expected);
}}

can_calculate_time_surcharge! {
    case01_weekday_midday: (13, WEDNESDAY, 0.),
    case02_weekday_peak: (17, WEDNESDAY, 148.),
    case03_weekday_peak_end: (19, WEDNESDAY, 148.),
    case04_weekday_night: (20, WEDNESDAY, 185.),
    case05_weekday_early_morning: (5, WEDNESDAY, 185.),
    case06_weekday_morning: (6, WEDNESDAY, 0.),
    case07_saturday_midday: (13, SATURDAY, 93.),
    case08_saturday_night: (21, SATURDAY, 278.),
    case09_sunday_evening_has_no_peak: (18, 0, 93.),
    case10_friday_peak: (18, 5, 148.),
    case11_monday_night: (23, 1, 185.),
}

#[test]
fn can_build_breakdown_in_fixed_order() {
    let quote = calculate(create_factors("13KG", 7., 21, SATURDAY, 90.));

    assert_eq!(
        get_labels(&quote),
        vec![BASE_PRICE_LABEL, DISTANCE_FEE_LABEL, DEMAND_SURCHARGE_LABEL, TIME_SURCHARGE_LABEL]
    );
    assert_eq!(quote.distance_fee, 40.);
    assert_eq!(quote.demand_surcharge, 370.);
    assert_eq!(quote.time_surcharge, 278.);
    assert_eq!(quote.total_price, 1850. + 40. + 370. + 278.);
}

#[test]
fn can_skip_zero_components_in_breakdown() {
    let quote = calculate(create_factors("6KG", 0., 13, SATURDAY, 10.));

    assert_eq!(get_labels(&quote), vec![BASE_PRICE_LABEL, TIME_SURCHARGE_LABEL]);
    assert_eq!(quote.breakdown[1].amount, 48.);
}

#[test]
fn cannot_quote_unknown_cylinder_size() {
    let calculator = PriceCalculator::new(TariffConfig::default());

    let result = calculator.calculate(&create_factors("50KG", 1., 13, WEDNESDAY, 0.));

    let err = result.expect_err("unknown size should fail");
    assert_eq!(err.field, "cylinder size");
    assert_eq!(err.value, "50KG");
    assert!(err.hint.contains("6KG, 13KG, 35KG"));
}

#[test]
fn can_use_custom_tariff() {
    let tariff = TariffConfig {
        base_prices: vec![("13KG".to_string(), 2000.)],
        free_radius_km: 2.,
        per_km_rate: 50.,
        ..TariffConfig::default()
    };

    let quote = PriceCalculator::new(tariff).calculate(&create_factors("13KG", 3., 13, WEDNESDAY, 50.)).unwrap();

    assert_eq!(quote.base_price, 2000.);
    assert_eq!(quote.distance_fee, 50.);
    assert_eq!(quote.demand_surcharge, 100.);
    assert_eq!(quote.total_price, 2150.);
}

#[test]
fn can_quote_order_from_locations() {
    let calculator = PriceCalculator::new(TariffConfig::default());
    let depot = Coordinate::new(NAIROBI_DEPOT.0, NAIROBI_DEPOT.1);

    let time = DeliveryTime::new(13, WEDNESDAY);
    let demand = FixedDemand::new(30.);

    let near = calculator.quote_order("13KG", &Coordinate::new(-1.30, 36.83), &depot, time, &demand).unwrap();
    let far = calculator.quote_order("13KG", &Coordinate::new(-1.2180, 36.8880), &depot, time, &demand).unwrap();

    assert_eq!(near.total_price, 1850.);
    assert_eq!(far.distance_fee, 121.);
    assert_eq!(far.total_price, 1971.);
}

#[test]
fn can_quote_many_orders_keeping_order() {
    let create_order = |id: &str, size: &str| OrderDraft {
        id: id.to_string(),
        cylinder_size: size.to_string(),
        location: Location::new(-1.30, 36.83, "Kilimani"),
    };
    let orders = vec![create_order("o1", "6KG"), create_order("o2", "9KG"), create_order("o3", "35KG")];

    let quotes = PriceCalculator::new(TariffConfig::default()).quote_many(
        orders.as_slice(),
        &test_depot(),
        DeliveryTime::new(13, WEDNESDAY),
        &FixedDemand::new(0.),
    );

    assert_eq!(quotes.len(), 3);
    assert_eq!(quotes[0].as_ref().map(|quote| quote.total_price), Ok(950.));
    assert!(quotes[1].is_err());
    assert_eq!(quotes[2].as_ref().map(|quote| quote.total_price), Ok(4200.));
}

#[test]
fn can_quote_many_orders_with_seeded_demand_repeatably() {
    let orders = (0..400)
        .map(|idx| OrderDraft {
            id: format!("o{idx}"),
            cylinder_size: "13KG".to_string(),
            location: Location::new(-1.30, 36.83, "Kilimani"),
        })
        .collect::<Vec<_>>();
    let calculator = PriceCalculator::new(TariffConfig::default());
    let depot = test_depot();
    let time = DeliveryTime::new(18, SATURDAY);
    let create_estimator = || TimeOfDayDemand::new(Arc::new(RepeatableRandom::new(7)), 10.);
    let pool = rayon::ThreadPoolBuilder::new().num_threads(8).build().expect("cannot build thread pool");

    let expected = {
        let estimator = create_estimator();
        orders
            .iter()
            .map(|order| {
                calculator
                    .quote_order("13KG", &order.location.coordinate(), &depot.coordinate(), time, &estimator)
                    .map(|quote| quote.demand_surcharge)
            })
            .collect::<Vec<_>>()
    };

    (0..5).for_each(|_| {
        let estimator = create_estimator();
        let surcharges = pool.install(|| {
            calculator
                .quote_many(orders.as_slice(), &depot, time, &estimator)
                .into_iter()
                .map(|quote| quote.map(|quote| quote.demand_surcharge))
                .collect::<Vec<_>>()
        });

        assert_eq!(surcharges, expected);
    });
}
