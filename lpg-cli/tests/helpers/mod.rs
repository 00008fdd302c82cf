#![allow(dead_code)]


use std::io::BufReader;

pub const ROUTE_REQUEST_PATH: &str = "../data/route.request.json";
pub const STOPS_CSV_PATH: &str = "../data/stops.csv";
pub const ORDERS_CSV_PATH: &str = "../data/orders.csv";
pub const CONFIG_PATH: &str = "../data/config.full.json";

/// Reads json value of given type from a file created by a command under test.
pub fn read_json_result<T: serde::de::DeserializeOwned>(file: &tempfile::NamedTempFile) -> T {
    serde_json::from_reader(BufReader::new(file.reopen().unwrap())).unwrap()
}
