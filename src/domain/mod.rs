//! Domain layer containing the proxy's entities and upstream contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Weather and currency data structures
//! - [`country_currency`] - Static country → currency table
//! - [`providers`] - Upstream provider trait definitions
//!
//! # Pipeline
//!
//! 1. [`providers::WeatherProvider`] resolves a city to a [`entities::WeatherResult`]
//! 2. Its [`entities::CountryCode`] selects a base currency via [`country_currency`]
//! 3. [`providers::RatesProvider`] quotes USD, EUR and KZT against that base

pub mod country_currency;
pub mod entities;
pub mod providers;
