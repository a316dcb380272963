use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{fields, record::Record};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Accepts only finite, non-zero values inside the geographic range.
    pub fn checked(lat: f64, lng: f64) -> Option<Self> {
        if !lat.is_finite() || !lng.is_finite() {
            return None;
        }
        if lat == 0.0 || lng == 0.0 {
            return None;
        }
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return None;
        }
        Some(Self { lat, lng })
    }

    pub fn as_pair(&self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}

/// Numbers pass through; strings are trimmed and parsed. Anything else is
/// not a coordinate.
pub fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Map pin for a location record, or `None` when the map is unavailable.
pub fn map_coordinates(record: &Record) -> Option<Coordinates> {
    let lat = coerce_number(record.first_present(fields::LATITUDE)?)?;
    let lng = coerce_number(record.first_present(fields::LONGITUDE)?)?;
    Coordinates::checked(lat, lng)
}

#[cfg(test)]
#[path = "tests/geo_tests.rs"]
mod tests;
