//! HTTP clients for the third-party APIs behind the proxy.
//!
//! - [`OpenWeatherClient`] - implements [`crate::domain::providers::WeatherProvider`]
//! - [`ExchangeRateClient`] - implements [`crate::domain::providers::RatesProvider`]

mod exchange_rate;
mod openweather;

pub use exchange_rate::ExchangeRateClient;
pub use openweather::OpenWeatherClient;

use crate::domain::providers::ProviderError;

/// User agent sent with every upstream request.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Builds the shared HTTP client used by both upstream clients.
pub fn http_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().user_agent(USER_AGENT).build()
}

/// Converts a reqwest error, stripping the request URL (it carries API keys).
fn transport_error(e: reqwest::Error) -> ProviderError {
    ProviderError::Transport(e.without_url().to_string())
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
