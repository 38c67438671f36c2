//! Reads stops from CSV.
//!
//! Expected headers are `id`, `name`, `lat`, `lon` and `address`; common
//! spellings (`latitude`, `lng`, `longitude`, capitalised names) are accepted.
//! Only the coordinates are required.

use std::fmt;
use std::io::Read;

use serde::Deserialize;
use tracing::debug;

use crate::error::PlannerError;
use crate::point::{validate, Point};

#[derive(Debug, Deserialize)]
struct CsvStop {
    #[serde(default, alias = "ID", alias = "Id")]
    id: Option<String>,
    #[serde(default, alias = "Name", alias = "NAME")]
    name: Option<String>,
    #[serde(alias = "latitude", alias = "Latitude", alias = "LAT", alias = "Lat")]
    lat: f64,
    #[serde(
        alias = "lng",
        alias = "longitude",
        alias = "Longitude",
        alias = "LON",
        alias = "Lon",
        alias = "LNG",
        alias = "Lng"
    )]
    lon: f64,
    #[serde(default, alias = "Address", alias = "ADDRESS")]
    address: Option<String>,
}

#[derive(Debug)]
pub enum InputError {
    Csv(csv::Error),
    Invalid(PlannerError),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Csv(err) => write!(f, "cannot read stops: {}", err),
            InputError::Invalid(err) => write!(f, "invalid stops: {}", err),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Csv(err) => Some(err),
            InputError::Invalid(err) => Some(err),
        }
    }
}

impl From<csv::Error> for InputError {
    fn from(err: csv::Error) -> Self {
        InputError::Csv(err)
    }
}

impl From<PlannerError> for InputError {
    fn from(err: PlannerError) -> Self {
        InputError::Invalid(err)
    }
}

/// Parse and validate stops.
///
/// A blank id falls back to the 1-based row number, a blank name to
/// `Stop <row>`.
pub fn read_points<R: Read>(reader: R) -> Result<Vec<Point>, InputError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut points = Vec::new();

    for (row, entry) in reader.deserialize::<CsvStop>().enumerate() {
        let stop = entry?;
        let row = row + 1;

        let id = non_blank(stop.id).unwrap_or_else(|| row.to_string());
        let name = non_blank(stop.name).unwrap_or_else(|| format!("Stop {}", row));

        let mut point = Point::new(id, name, stop.lat, stop.lon);
        point.address = non_blank(stop.address);
        points.push(point);
    }

    validate(&points)?;
    debug!(count = points.len(), "stops loaded");

    Ok(points)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
