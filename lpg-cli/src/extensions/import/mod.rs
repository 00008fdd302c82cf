//! Import command helpers

mod csv;
pub use self::csv::*;

use crate::extensions::format::RouteRequest;
use lpg_core::prelude::GenericError;
use std::io::{BufReader, Read};

/// Imports delivery stops from specific format into a route request.
pub fn import_route_request<R: Read>(input_format: &str, reader: BufReader<R>) -> Result<RouteRequest, GenericError> {
    match input_format {
        "csv" => read_csv_stops(reader)
            .map(|stops| RouteRequest { depot: None, stops })
            .map_err(|err| format!("cannot read csv: {err}").into()),
        _ => Err(format!("unknown format: '{input_format}'").into()),
    }
}
