//! Exchange rate lookup service.

use std::sync::Arc;

use crate::domain::country_currency::{self, DEFAULT_CURRENCY};
use crate::domain::entities::CurrencyResult;
use crate::domain::providers::RatesProvider;
use crate::error::AppError;

pub const MISSING_COUNTRY_MESSAGE: &str = "Please provide a country code";
pub const CURRENCY_UPSTREAM_MESSAGE: &str = "Server error while fetching currency data";

/// Service quoting USD, EUR and KZT against a country's currency.
pub struct CurrencyService {
    provider: Arc<dyn RatesProvider>,
}

impl CurrencyService {
    /// Creates a new currency service.
    pub fn new(provider: Arc<dyn RatesProvider>) -> Self {
        Self { provider }
    }

    /// Fetches exchange rates based at the currency of `country_code`.
    ///
    /// Countries outside the static table silently use USD as the base; the
    /// substitution is only visible in debug logs.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidRequest`] if `country_code` is empty or whitespace
    /// - [`AppError::Upstream`] on any upstream failure
    pub async fn get_currency(&self, country_code: &str) -> Result<CurrencyResult, AppError> {
        let country_code = country_code.trim();
        if country_code.is_empty() {
            return Err(AppError::invalid_request(MISSING_COUNTRY_MESSAGE));
        }

        let base_currency = match country_currency::lookup(country_code) {
            Some(currency) => currency,
            None => {
                tracing::debug!(
                    country = country_code,
                    "Country not in currency table, using {DEFAULT_CURRENCY}"
                );
                DEFAULT_CURRENCY
            }
        };

        match self.provider.latest_rates(base_currency).await {
            Ok(rates) => {
                metrics::counter!("upstream_requests_total", "service" => "currency", "outcome" => "ok")
                    .increment(1);
                Ok(CurrencyResult {
                    base_currency: base_currency.to_string(),
                    rates,
                })
            }
            Err(e) => {
                metrics::counter!("upstream_requests_total", "service" => "currency", "outcome" => "error")
                    .increment(1);
                tracing::error!(
                    country = country_code,
                    base = base_currency,
                    error = %e,
                    "Error fetching currency data"
                );
                Err(AppError::upstream(CURRENCY_UPSTREAM_MESSAGE))
            }
        }
    }
}
