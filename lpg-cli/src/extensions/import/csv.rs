//! Import from a simple csv format logic.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/import/csv_test.rs"]
mod csv_test;

pub use self::actual::{read_csv_orders, read_csv_stops};

#[cfg(feature = "csv-format")]
mod actual {
    use crate::extensions::format::JsonLocation;
    use lpg_core::models::OrderDraft;
    use lpg_core::prelude::{GenericError, GenericResult};
    use serde::Deserialize;
    use std::io::{BufReader, Read};

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "UPPERCASE")]
    struct CsvStop {
        id: String,
        lat: f64,
        lng: f64,
        #[serde(default)]
        address: String,
    }

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "UPPERCASE")]
    struct CsvOrder {
        id: String,
        size: String,
        lat: f64,
        lng: f64,
    }

    fn read_csv_entries<T, R: Read>(reader: BufReader<R>) -> GenericResult<Vec<T>>
    where
        for<'de> T: Deserialize<'de>,
    {
        let mut reader = csv::Reader::from_reader(reader);

        reader
            .deserialize()
            .enumerate()
            .map(|(idx, entry)| entry.map_err(|err| GenericError::from(format!("line {}: {err}", idx + 2))))
            .collect()
    }

    fn create_location(id: String, lat: f64, lng: f64, address: String) -> GenericResult<JsonLocation> {
        let location = JsonLocation { id: Some(id), lat, lng, address };

        location.to_location().map_err(|err| format!("'{}': {err}", location.id.as_deref().unwrap_or_default()))?;

        Ok(location)
    }

    /// Reads delivery stops from csv with `ID,LAT,LNG,ADDRESS` columns.
    pub fn read_csv_stops<R: Read>(reader: BufReader<R>) -> GenericResult<Vec<JsonLocation>> {
        read_csv_entries::<CsvStop, _>(reader)?
            .into_iter()
            .map(|stop| create_location(stop.id, stop.lat, stop.lng, stop.address))
            .collect()
    }

    /// Reads orders from csv with `ID,SIZE,LAT,LNG` columns.
    pub fn read_csv_orders<R: Read>(reader: BufReader<R>) -> GenericResult<Vec<OrderDraft>> {
        read_csv_entries::<CsvOrder, _>(reader)?
            .into_iter()
            .map(|order| -> GenericResult<OrderDraft> {
                let location = create_location(order.id.clone(), order.lat, order.lng, String::default())?;

                Ok(OrderDraft { id: order.id, cylinder_size: order.size, location: location.to_location()? })
            })
            .collect()
    }
}

#[cfg(not(feature = "csv-format"))]
mod actual {
    use crate::extensions::format::JsonLocation;
    use lpg_core::models::OrderDraft;
    use lpg_core::prelude::GenericResult;
    use std::io::{BufReader, Read};

    /// A stub method for reading stops from csv format.
    pub fn read_csv_stops<R: Read>(_reader: BufReader<R>) -> GenericResult<Vec<JsonLocation>> {
        Err("csv format is not enabled".into())
    }

    /// A stub method for reading orders from csv format.
    pub fn read_csv_orders<R: Read>(_reader: BufReader<R>) -> GenericResult<Vec<OrderDraft>> {
        Err("csv format is not enabled".into())
    }
}
