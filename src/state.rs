//! Shared application state injected into handlers.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::services::{CurrencyService, WeatherService};

/// State shared by all request handlers.
///
/// Holds no mutable data; every field is either immutable or an `Arc` to a
/// stateless service.
#[derive(Clone)]
pub struct AppState {
    pub weather_service: Arc<WeatherService>,
    pub currency_service: Arc<CurrencyService>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(
        weather_service: Arc<WeatherService>,
        currency_service: Arc<CurrencyService>,
    ) -> Self {
        Self {
            weather_service,
            currency_service,
            started_at: Utc::now(),
        }
    }
}
