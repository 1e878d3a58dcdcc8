//! API route configuration.

use crate::api::handlers::{currency_handler, weather_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Public proxy routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET /weather?city={city}`      - Current weather for a city
/// - `GET /currency?country={code}`  - Exchange rates for a country's currency
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/weather", get(weather_handler))
        .route("/currency", get(currency_handler))
}
