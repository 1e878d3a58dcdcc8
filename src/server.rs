//! HTTP server initialization and runtime setup.
//!
//! Builds the upstream clients and services, then runs the Axum server until
//! Ctrl-C is received.

use crate::application::services::{CurrencyService, WeatherService};
use crate::config::Config;
use crate::infrastructure::upstream::{self, ExchangeRateClient, OpenWeatherClient};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::sync::Arc;

/// Builds application state wired to the real upstream APIs.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed.
pub fn build_state(config: &Config) -> Result<AppState> {
    let http = upstream::http_client().context("Failed to build HTTP client")?;

    let weather_provider = Arc::new(OpenWeatherClient::new(
        http.clone(),
        config.openweather_base_url.clone(),
        config.openweather_api_key.clone(),
    ));
    let rates_provider = Arc::new(ExchangeRateClient::new(
        http,
        config.exchange_rate_base_url.clone(),
        config.exchange_rate_api_key.clone(),
    ));

    Ok(AppState::new(
        Arc::new(WeatherService::new(weather_provider)),
        Arc::new(CurrencyService::new(rates_provider)),
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;
    let app = app_router(state, &config.static_dir);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
