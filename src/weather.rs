use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::LookupError;

/// Current conditions for one location, as decoded from a complete response.
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherResult {
    pub location_name: String,
    pub temperature_celsius: f64,
    pub temperature_fahrenheit: f64,
    pub condition_text: String,
    pub condition_code: i64,
}

/// A place name or a `lat,lon` pair. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocationQuery(String);

impl LocationQuery {
    pub fn new(query: &str) -> Result<Self, LookupError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(LookupError::InvalidQuery);
        }
        Ok(Self(query.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Coordinates> for LocationQuery {
    fn from(coords: Coordinates) -> Self {
        Self(coords.to_string())
    }
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CoordinatesError {
    #[error("expected LAT,LON")]
    Format,

    #[error("latitude must be -90 to 90, longitude must be -180 to 180")]
    OutOfRange,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Result<Self, CoordinatesError> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(CoordinatesError::OutOfRange);
        }
        Ok(Self { lat, lon })
    }
}

impl FromStr for Coordinates {
    type Err = CoordinatesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s.split_once(',').ok_or(CoordinatesError::Format)?;
        let lat = lat.trim().parse().map_err(|_| CoordinatesError::Format)?;
        let lon = lon.trim().parse().map_err(|_| CoordinatesError::Format)?;
        Self::new(lat, lon)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_is_trimmed() {
        let query = LocationQuery::new("  Kathmandu ").unwrap();
        assert_eq!(query.as_str(), "Kathmandu");
    }

    #[test]
    fn test_blank_query_is_invalid() {
        assert!(matches!(LocationQuery::new(""), Err(LookupError::InvalidQuery)));
        assert!(matches!(LocationQuery::new("   "), Err(LookupError::InvalidQuery)));
    }

    #[test]
    fn test_coordinates_query() {
        let coords: Coordinates = "27.7172, 85.324".parse().unwrap();
        assert_eq!(LocationQuery::from(coords).as_str(), "27.7172,85.324");
    }

    #[test]
    fn test_coordinates_rejects_bad_input() {
        assert_eq!("27.7".parse::<Coordinates>(), Err(CoordinatesError::Format));
        assert_eq!("north,east".parse::<Coordinates>(), Err(CoordinatesError::Format));
        assert_eq!("91,0".parse::<Coordinates>(), Err(CoordinatesError::OutOfRange));
        assert_eq!("0,-181".parse::<Coordinates>(), Err(CoordinatesError::OutOfRange));
    }
}
