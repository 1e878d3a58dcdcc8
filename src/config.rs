//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export OPENWEATHER_API_KEY="..."
//! export EXCHANGE_RATE_API_KEY="..."
//! export PORT=3000
//! ```
//!
//! ## Secrets
//!
//! - `OPENWEATHER_API_KEY` - OpenWeather API key
//! - `EXCHANGE_RATE_API_KEY` - ExchangeRate-API key
//!
//! A missing key does not stop the server; the upstream then rejects the
//! request and the proxy answers with a 500.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address, overrides `HOST`/`PORT` (e.g. `127.0.0.1:8080`)
//! - `HOST` - Bind host (default: `0.0.0.0`)
//! - `PORT` - Bind port (default: `3000`)
//! - `STATIC_DIR` - Directory served for non-API paths (default: `public`)
//! - `OPENWEATHER_BASE_URL` - default `https://api.openweathermap.org`
//! - `EXCHANGE_RATE_BASE_URL` - default `https://v6.exchangerate-api.com`
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use url::Url;

pub const DEFAULT_OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org";
pub const DEFAULT_EXCHANGE_RATE_BASE_URL: &str = "https://v6.exchangerate-api.com";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub static_dir: PathBuf,
    pub log_level: String,
    pub log_format: String,

    // ── Upstreams ───────────────────────────────────────────────────────────
    /// Empty when `OPENWEATHER_API_KEY` is unset.
    pub openweather_api_key: String,
    pub openweather_base_url: Url,
    /// Empty when `EXCHANGE_RATE_API_KEY` is unset.
    pub exchange_rate_api_key: String,
    pub exchange_rate_base_url: Url,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if an upstream base URL cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let listen_addr = Self::load_listen_addr();
        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("public"));
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let openweather_api_key = env::var("OPENWEATHER_API_KEY").unwrap_or_default();
        let exchange_rate_api_key = env::var("EXCHANGE_RATE_API_KEY").unwrap_or_default();

        let openweather_base_url =
            Self::load_url("OPENWEATHER_BASE_URL", DEFAULT_OPENWEATHER_BASE_URL)?;
        let exchange_rate_base_url =
            Self::load_url("EXCHANGE_RATE_BASE_URL", DEFAULT_EXCHANGE_RATE_BASE_URL)?;

        Ok(Self {
            listen_addr,
            static_dir,
            log_level,
            log_format,
            openweather_api_key,
            openweather_base_url,
            exchange_rate_api_key,
            exchange_rate_base_url,
        })
    }

    /// Loads the bind address.
    ///
    /// Priority:
    /// 1. `LISTEN` environment variable
    /// 2. Constructed from `HOST` (default `0.0.0.0`) and `PORT` (default `3000`)
    fn load_listen_addr() -> String {
        if let Ok(listen) = env::var("LISTEN") {
            return listen;
        }

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());

        format!("{}:{}", host, port)
    }

    fn load_url(var: &str, default: &str) -> Result<Url> {
        let raw = env::var(var).unwrap_or_else(|_| default.to_string());
        Url::parse(&raw).with_context(|| format!("{var} is not a valid URL: '{raw}'"))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not a socket address
    /// - `log_format` is not `text` or `json`
    /// - an upstream base URL is not `http` or `https`
    pub fn validate(&self) -> Result<()> {
        self.socket_addr()?;

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        for (name, url) in [
            ("OPENWEATHER_BASE_URL", &self.openweather_base_url),
            ("EXCHANGE_RATE_BASE_URL", &self.exchange_rate_base_url),
        ] {
            if url.scheme() != "http" && url.scheme() != "https" {
                anyhow::bail!("{name} must use http or https, got '{}'", url);
            }
        }

        Ok(())
    }

    /// Parses the bind address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.listen_addr.parse().with_context(|| {
            format!(
                "Listen address must be in format 'host:port', got '{}'",
                self.listen_addr
            )
        })
    }

    /// Names of secret variables that are unset or empty.
    pub fn missing_secrets(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.openweather_api_key.is_empty() {
            missing.push("OPENWEATHER_API_KEY");
        }
        if self.exchange_rate_api_key.is_empty() {
            missing.push("EXCHANGE_RATE_API_KEY");
        }
        missing
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Static dir: {}", self.static_dir.display());
        tracing::info!(
            "  OpenWeather: {} (key {})",
            self.openweather_base_url,
            mask_secret(&self.openweather_api_key)
        );
        tracing::info!(
            "  ExchangeRate-API: {} (key {})",
            self.exchange_rate_base_url,
            mask_secret(&self.exchange_rate_api_key)
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);

        for name in self.missing_secrets() {
            tracing::warn!("{name} is not set; upstream calls will fail with 500");
        }
    }
}

/// Masks an API key for logging, keeping only its last four characters.
///
/// - `""` → `missing`
/// - `abcd1234` → `****1234`
fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        return "missing".to_string();
    }

    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 4 {
        return "****".to_string();
    }

    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{}", tail)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
