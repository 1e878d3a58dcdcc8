//! Weather lookup service.

use std::sync::Arc;

use crate::domain::entities::WeatherResult;
use crate::domain::providers::{ProviderError, WeatherProvider};
use crate::error::AppError;

pub const MISSING_CITY_MESSAGE: &str = "Please provide a city name";
pub const CITY_NOT_FOUND_MESSAGE: &str = "City not found";
pub const WEATHER_UPSTREAM_MESSAGE: &str = "Server error while fetching weather data";

/// Service resolving a city name to its current weather.
///
/// Maps provider failures onto the three public error kinds and logs every
/// failure. No retry is performed.
pub struct WeatherService {
    provider: Arc<dyn WeatherProvider>,
}

impl WeatherService {
    /// Creates a new weather service.
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    /// Fetches current weather for `city`.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidRequest`] if `city` is empty or whitespace
    /// - [`AppError::NotFound`] if the upstream does not know the city
    /// - [`AppError::Upstream`] on any other upstream failure
    pub async fn get_weather(&self, city: &str) -> Result<WeatherResult, AppError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(AppError::invalid_request(MISSING_CITY_MESSAGE));
        }

        match self.provider.current_weather(city).await {
            Ok(weather) => {
                metrics::counter!("upstream_requests_total", "service" => "weather", "outcome" => "ok")
                    .increment(1);
                tracing::debug!(city, country = %weather.country_code, "Weather fetched");
                Ok(weather)
            }
            Err(ProviderError::NotFound) => {
                metrics::counter!("upstream_requests_total", "service" => "weather", "outcome" => "not_found")
                    .increment(1);
                tracing::error!(city, "Error fetching weather data: city not found");
                Err(AppError::not_found(CITY_NOT_FOUND_MESSAGE))
            }
            Err(e) => {
                metrics::counter!("upstream_requests_total", "service" => "weather", "outcome" => "error")
                    .increment(1);
                tracing::error!(city, error = %e, "Error fetching weather data");
                Err(AppError::upstream(WEATHER_UPSTREAM_MESSAGE))
            }
        }
    }
}
