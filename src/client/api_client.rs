//! HTTP client for the proxy's own API.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use crate::api::dto::currency::CurrencyResponse;
use crate::api::dto::weather::WeatherResponse;
use crate::domain::entities::{CountryCode, CurrencyResult, WeatherResult};
use crate::error::ErrorBody;

/// Failure calling the proxy.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The proxy answered with a non-success status.
    #[error("proxy responded with status {status}")]
    Api {
        status: u16,
        /// The `error` field of the response body, when present.
        message: Option<String>,
    },

    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ClientError {
    /// Text to show the user: the proxy's own message, or `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Api {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Calls made by the orchestrator.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProxyClient: Send + Sync {
    /// `GET /api/weather?city=`
    async fn get_weather(&self, city: &str) -> Result<WeatherResult, ClientError>;

    /// `GET /api/currency?country=`
    async fn get_currency(&self, country: &CountryCode) -> Result<CurrencyResult, ClientError>;
}

/// [`ProxyClient`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpProxyClient {
    http: Client,
    base_url: Url,
}

impl HttpProxyClient {
    /// Creates a client for the proxy at `base_url` (e.g. `http://localhost:3000`).
    pub fn new(http: Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// Appends `path` to the base URL, keeping any path prefix it carries.
    fn endpoint(&self, path: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::Transport(format!("'{}' cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(path);
        Ok(url)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        path: &[&str],
        query: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        let url = self.endpoint(path)?;

        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .map(|b| b.error);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ProxyClient for HttpProxyClient {
    async fn get_weather(&self, city: &str) -> Result<WeatherResult, ClientError> {
        self.fetch::<WeatherResponse>(&["api", "weather"], &[("city", city)])
            .await
            .map(Into::into)
    }

    async fn get_currency(&self, country: &CountryCode) -> Result<CurrencyResult, ClientError> {
        self.fetch::<CurrencyResponse>(&["api", "currency"], &[("country", country.as_str())])
            .await
            .map(Into::into)
    }
}
