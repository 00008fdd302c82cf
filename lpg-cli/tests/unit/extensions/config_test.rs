use super::*;
use crate::helpers::CONFIG_PATH;
use lpg_core::models::common::DeliveryTime;
use std::fs::File;

fn read_config_str(json: &str) -> Config {
    read_config(BufReader::new(json.as_bytes())).unwrap()
}

fn create_random() -> Arc<dyn Random + Send + Sync> {
    Arc::new(DefaultRandom::default())
}

#[test]
fn can_use_defaults_for_empty_config() {
    let config = read_config_str("{}");

    let depot = config.get_depot().unwrap();

    assert_eq!((depot.latitude, depot.longitude), (-1.2921, 36.8219));
    assert_eq!(depot.address, DEFAULT_DEPOT_ADDRESS);
    assert_eq!(config.create_routing_config().unwrap(), RoutingConfig::default());
    assert_eq!(config.create_tariff().unwrap(), TariffConfig::default());
}

#[test]
fn can_read_full_config_from_file() {
    let config = read_config(BufReader::new(File::open(CONFIG_PATH).unwrap())).unwrap();

    let routing = config.create_routing_config().unwrap();
    let tariff = config.create_tariff().unwrap();
    let estimator = config.create_demand_estimator(create_random()).unwrap();

    assert_eq!(routing.average_speed_kmh, 40.);
    assert_eq!(tariff.get_cylinder_sizes(), vec!["6KG", "13KG", "35KG", "50KG"]);
    assert_eq!(tariff.get_base_price("50KG"), Ok(6200.));
    assert_eq!(tariff.free_radius_km, 3.);
    assert_eq!(tariff.per_km_rate, 25.);
    assert_eq!(tariff.night_hours, HourWindow::new(21, 6));
    assert_eq!(estimator.estimate(&DeliveryTime::new(18, 3)), 50.);
}

#[test]
fn can_override_only_specified_values() {
    let config = read_config_str(r#"{ "routing": { "fuelPrice": 180 }, "tariff": { "weekendRate": 0.1 } }"#);

    let routing = config.create_routing_config().unwrap();
    let tariff = config.create_tariff().unwrap();

    assert_eq!(routing, RoutingConfig { fuel_price_per_liter: 180., ..RoutingConfig::default() });
    assert_eq!(tariff, TariffConfig { weekend_rate: 0.1, ..TariffConfig::default() });
}

parameterized_test! {can_create_demand_estimator, (json, time, expected_range), {
    let config = read_config_str(json);

    let level = config.create_demand_estimator(create_random()).unwrap().estimate(&time);

    assert!(expected_range.contains(&level), "unexpected level: {level}");
}}

can_create_demand_estimator! {
    case01_default: ("{}", DeliveryTime::new(18, 3), 60. ..70.),
    case02_fixed: (r#"{ "demand": { "type": "fixed", "level": 75 } }"#, DeliveryTime::new(18, 3), 75. ..75.1),
    case03_no_jitter: (r#"{ "demand": { "type": "time-of-day", "jitter": 0 } }"#, DeliveryTime::new(7, 6), 65. ..65.1),
    case04_default_jitter: (r#"{ "demand": { "type": "time-of-day" } }"#, DeliveryTime::new(10, 2), 30. ..40.),
}

parameterized_test! {can_reject_invalid_config, (json, expected_error), {
    let config = read_config_str(json);

    let result = config
        .create_routing_config()
        .and_then(|_| config.create_tariff())
        .and_then(|_| config.get_depot())
        .map(|_| ());

    assert_eq!(result.unwrap_err().to_string(), expected_error);
}}

can_reject_invalid_config! {
    case01_zero_speed: (
        r#"{ "routing": { "averageSpeed": 0 } }"#,
        "invalid averageSpeed: '0', expected positive value"
    ),
    case02_negative_rate: (
        r#"{ "tariff": { "nightRate": -0.1 } }"#,
        "invalid rate: '-0.1', expected non-negative value"
    ),
    case03_unsorted_tiers: (
        r#"{ "tariff": { "demandTiers": [{ "upTo": 60, "rate": 0.05 }, { "upTo": 30, "rate": 0 }] } }"#,
        "demand tiers must be sorted by 'upTo' in ascending order"
    ),
    case04_wrong_hours: (
        r#"{ "tariff": { "peakHours": [25, 3] } }"#,
        "invalid peakHours: '[25, 3]', expected hours in [0, 24] range"
    ),
    case05_no_prices: (
        r#"{ "tariff": { "basePrices": [] } }"#,
        "tariff must have at least one base price"
    ),
    case06_wrong_depot: (
        r#"{ "depot": { "lat": 95, "lng": 36.8 } }"#,
        "depot: invalid latitude: '95', expected value in [-90, 90] range"
    ),
}

#[test]
fn cannot_read_unknown_demand_type() {
    let result = read_config(BufReader::new(r#"{ "demand": { "type": "weather" } }"#.as_bytes()));

    assert!(result.unwrap_err().to_string().starts_with("cannot deserialize config"));
}
