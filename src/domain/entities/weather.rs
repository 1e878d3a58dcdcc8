//! Weather entity produced by the weather stage of the pipeline.

use std::fmt;

/// Two-letter country code reported by the weather provider.
///
/// This is the only value carried from the weather stage into the currency
/// stage. An empty code means the provider did not report a country.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CountryCode(String);

impl CountryCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Geographic position of the matched city.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Current conditions for a city, in metric units.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherResult {
    pub city_name: String,
    pub country_code: CountryCode,
    /// Air temperature in °C.
    pub temperature: f64,
    /// Perceived temperature in °C.
    pub feels_like: f64,
    pub description: String,
    /// Wind speed in m/s.
    pub wind_speed: f64,
    /// Relative humidity in percent.
    pub humidity: u32,
    /// Atmospheric pressure in hPa.
    pub pressure: u32,
    pub coordinates: Coordinates,
    /// Precipitation volume in mm, `0.0` when the provider reports none.
    pub rain: f64,
}
