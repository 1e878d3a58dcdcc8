//! Two-stage search pipeline: weather by city, then currency by country.

use std::sync::Arc;

use crate::client::api_client::ProxyClient;
use crate::client::state::UiState;
use crate::domain::entities::{CountryCode, CurrencyResult};

/// Shown when the proxy gives no error text of its own.
pub const WEATHER_FALLBACK_MESSAGE: &str = "Failed to fetch weather data";

/// Drives one search request through its UI states.
///
/// Requests are not cancelled or de-duplicated; two overlapping searches
/// each run to completion and the last one to finish wins the display.
pub struct Orchestrator<C: ProxyClient + ?Sized> {
    client: Arc<C>,
}

impl<C: ProxyClient + ?Sized> Orchestrator<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Entry point for both the search button and the Enter key.
    ///
    /// Trims `raw_input`; blank input issues no request and returns `None`,
    /// leaving the UI untouched.
    pub async fn search<F>(&self, raw_input: &str, observer: F) -> Option<UiState>
    where
        F: FnMut(&UiState) + Send,
    {
        let city = raw_input.trim();
        if city.is_empty() {
            return None;
        }

        Some(self.fetch_weather_and_currency(city, observer).await)
    }

    /// Runs the pipeline for a trimmed, non-empty city.
    ///
    /// Every state the request passes through is handed to `observer` in
    /// order; the final state is returned.
    pub async fn fetch_weather_and_currency<F>(&self, city: &str, mut observer: F) -> UiState
    where
        F: FnMut(&UiState) + Send,
    {
        observer(&UiState::Loading);

        let weather = match self.client.get_weather(city).await {
            Ok(weather) => weather,
            Err(e) => {
                tracing::debug!(city, error = %e, "Weather request failed");
                let state = UiState::Error(e.user_message(WEATHER_FALLBACK_MESSAGE));
                observer(&state);
                return state;
            }
        };

        observer(&UiState::WeatherLoaded(weather.clone()));

        let state = match self.fetch_currency(&weather.country_code).await {
            Some(currency) => UiState::CurrencyLoaded { weather, currency },
            None => UiState::CurrencyFailed(weather),
        };
        observer(&state);
        state
    }

    /// Currency failures are logged and swallowed.
    async fn fetch_currency(&self, country: &CountryCode) -> Option<CurrencyResult> {
        if country.is_empty() {
            tracing::warn!("Weather result has no country code, skipping currency");
            return None;
        }

        match self.client.get_currency(country).await {
            Ok(currency) => Some(currency),
            Err(e) => {
                tracing::warn!(country = %country, error = %e, "Failed to fetch currency data");
                None
            }
        }
    }
}
