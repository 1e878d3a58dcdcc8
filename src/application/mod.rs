//! Application layer services implementing the proxy operations.
//!
//! Services validate input, call the upstream providers through their domain
//! traits and map provider failures onto [`crate::error::AppError`].
//!
//! # Available Services
//!
//! - [`services::weather_service::WeatherService`] - weather lookup by city
//! - [`services::currency_service::CurrencyService`] - exchange rates by country code

pub mod services;
