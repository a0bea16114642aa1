use super::error::GeocodeError;
use serde::Serialize;
use std::fmt;

/// A latitude/longitude pair in decimal degrees.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    lat: f64,
    lon: f64,
}

impl Coord {
    /// Builds a coordinate, rejecting anything outside lat [-90, 90] / lon [-180, 180].
    pub fn new(lat: f64, lon: f64) -> Result<Self, GeocodeError> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(GeocodeError::OutOfRange { lat, lon });
        }
        Ok(Self { lat, lon })
    }

    /// For compile-time constants already known to be in range.
    pub(crate) const fn new_unchecked(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lon)
    }
}
