//! DTOs for the weather endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Coordinates, CountryCode, WeatherResult};

/// Query string of `GET /api/weather`.
#[derive(Debug, Deserialize, Validate)]
pub struct WeatherQuery {
    #[validate(
        required(message = "Please provide a city name"),
        length(min = 1, message = "Please provide a city name")
    )]
    pub city: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinatesDto {
    pub lat: f64,
    pub lon: f64,
}

/// Weather payload returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherResponse {
    pub city_name: String,
    pub country_code: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub description: String,
    pub wind_speed: f64,
    pub humidity: u32,
    pub pressure: u32,
    pub coordinates: CoordinatesDto,
    #[serde(default)]
    pub rain: f64,
}

impl From<WeatherResult> for WeatherResponse {
    fn from(weather: WeatherResult) -> Self {
        Self {
            city_name: weather.city_name,
            country_code: weather.country_code.to_string(),
            temperature: weather.temperature,
            feels_like: weather.feels_like,
            description: weather.description,
            wind_speed: weather.wind_speed,
            humidity: weather.humidity,
            pressure: weather.pressure,
            coordinates: CoordinatesDto {
                lat: weather.coordinates.lat,
                lon: weather.coordinates.lon,
            },
            rain: weather.rain,
        }
    }
}

impl From<WeatherResponse> for WeatherResult {
    fn from(dto: WeatherResponse) -> Self {
        Self {
            city_name: dto.city_name,
            country_code: CountryCode::new(dto.country_code),
            temperature: dto.temperature,
            feels_like: dto.feels_like,
            description: dto.description,
            wind_speed: dto.wind_speed,
            humidity: dto.humidity,
            pressure: dto.pressure,
            coordinates: Coordinates {
                lat: dto.coordinates.lat,
                lon: dto.coordinates.lon,
            },
            rain: dto.rain,
        }
    }
}
