//! # Weather & Currency Proxy
//!
//! A small Axum service that proxies two third-party REST APIs, plus the
//! client pipeline that combines them.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, the country → currency table and provider traits
//! - **Application Layer** ([`application`]) - `getWeather` / `getCurrency` services
//! - **Infrastructure Layer** ([`infrastructure`]) - OpenWeather and ExchangeRate-API clients
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//! - **Client** ([`client`]) - Weather → currency orchestrator with explicit UI state
//!
//! ## Flow
//!
//! 1. The client calls `GET /api/weather?city=Almaty`
//! 2. The proxy answers with current weather, including `countryCode: "KZ"`
//! 3. The client calls `GET /api/currency?country=KZ`
//! 4. The proxy picks `KZT` as base and returns USD, EUR and KZT rates
//! 5. The client renders both panels; a currency failure only hides the rates
//!
//! ## Quick Start
//!
//! ```bash
//! export OPENWEATHER_API_KEY="..."
//! export EXCHANGE_RATE_API_KEY="..."
//!
//! # Start the proxy
//! cargo run
//!
//! # Query it from the terminal
//! cargo run --bin weather-client -- Almaty
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod client;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CurrencyService, WeatherService};
    pub use crate::client::{HttpProxyClient, Orchestrator, ProxyClient, UiState};
    pub use crate::domain::entities::{CountryCode, CurrencyResult, Rates, WeatherResult};
    pub use crate::domain::providers::{ProviderError, RatesProvider, WeatherProvider};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
