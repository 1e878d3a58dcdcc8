//! Provider trait for exchange rate lookups.

use crate::domain::entities::Rates;
use crate::domain::providers::ProviderError;
use async_trait::async_trait;

/// Source of exchange rates.
///
/// # Implementations
///
/// - [`crate::infrastructure::upstream::ExchangeRateClient`] - ExchangeRate-API v6
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RatesProvider: Send + Sync {
    /// Fetches the latest USD, EUR and KZT rates quoted against `base_currency`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Malformed`] if any quoted currency is missing
    /// from the upstream payload.
    async fn latest_rates(&self, base_currency: &str) -> Result<Rates, ProviderError>;
}
