//! ExchangeRate-API v6 client.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use super::{transport_error, truncate_body};
use crate::domain::entities::Rates;
use crate::domain::providers::{ProviderError, RatesProvider};

/// Client for `GET /v6/{key}/latest/{base}`.
#[derive(Debug, Clone)]
pub struct ExchangeRateClient {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl ExchangeRateClient {
    /// Creates a client rooted at `base_url` (e.g. `https://v6.exchangerate-api.com`).
    pub fn new(http: Client, base_url: Url, api_key: String) -> Self {
        Self {
            http,
            base_url,
            api_key,
        }
    }

    fn endpoint(&self, base_currency: &str) -> Result<Url, ProviderError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ProviderError::Transport("exchange rate base URL cannot be a base".into()))?
            .pop_if_empty()
            .extend(["v6", self.api_key.as_str(), "latest", base_currency]);
        Ok(url)
    }
}

#[async_trait]
impl RatesProvider for ExchangeRateClient {
    async fn latest_rates(&self, base_currency: &str) -> Result<Rates, ProviderError> {
        let response = self
            .http
            .get(self.endpoint(base_currency)?)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let parsed: ErLatestResponse =
            serde_json::from_str(&body).map_err(|e| ProviderError::Malformed(e.to_string()))?;

        parsed.try_into()
    }
}

#[derive(Debug, Deserialize)]
struct ErLatestResponse {
    result: String,
    #[serde(rename = "error-type")]
    error_type: Option<String>,
    #[serde(default)]
    conversion_rates: HashMap<String, f64>,
}

impl TryFrom<ErLatestResponse> for Rates {
    type Error = ProviderError;

    fn try_from(parsed: ErLatestResponse) -> Result<Self, Self::Error> {
        if parsed.result != "success" {
            return Err(ProviderError::Malformed(format!(
                "result '{}' ({})",
                parsed.result,
                parsed.error_type.as_deref().unwrap_or("no error type")
            )));
        }

        let rate = |code: &str| {
            parsed
                .conversion_rates
                .get(code)
                .copied()
                .ok_or_else(|| ProviderError::Malformed(format!("missing {code} rate")))
        };

        Ok(Rates {
            usd: rate("USD")?,
            eur: rate("EUR")?,
            kzt: rate("KZT")?,
        })
    }
}
