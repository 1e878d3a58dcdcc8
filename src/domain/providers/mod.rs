//! Upstream provider trait definitions for the domain layer.
//!
//! These traits abstract the two third-party APIs the proxy talks to. They are
//! implemented by HTTP clients in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for upstream lookups
//! - Implementations live in `crate::infrastructure::upstream`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Providers
//!
//! - [`WeatherProvider`] - Current weather by city name
//! - [`RatesProvider`] - Latest exchange rates for a base currency

pub mod error;
pub mod rates_provider;
pub mod weather_provider;

pub use error::ProviderError;
pub use rates_provider::RatesProvider;
pub use weather_provider::WeatherProvider;

#[cfg(test)]
pub use rates_provider::MockRatesProvider;
#[cfg(test)]
pub use weather_provider::MockWeatherProvider;
