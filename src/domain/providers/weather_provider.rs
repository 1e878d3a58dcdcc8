//! Provider trait for current weather lookups.

use crate::domain::entities::WeatherResult;
use crate::domain::providers::ProviderError;
use async_trait::async_trait;

/// Source of current weather conditions.
///
/// # Implementations
///
/// - [`crate::infrastructure::upstream::OpenWeatherClient`] - OpenWeather current weather API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetches current conditions for a city in metric units.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::NotFound`] if the upstream does not know the city.
    /// Any other failure maps to one of the remaining [`ProviderError`] variants.
    async fn current_weather(&self, city: &str) -> Result<WeatherResult, ProviderError>;
}
