//! Handler for the currency endpoint.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use validator::Validate;

use crate::api::dto::currency::{CurrencyQuery, CurrencyResponse};
use crate::application::services::currency_service::MISSING_COUNTRY_MESSAGE;
use crate::error::AppError;
use crate::state::AppState;

/// Returns USD, EUR and KZT rates based at a country's currency.
///
/// # Endpoint
///
/// `GET /api/currency?country={code}`
///
/// Countries missing from the currency table use USD as the base.
///
/// # Response Codes
///
/// - **200 OK**: Rates fetched
/// - **400 Bad Request**: `country` missing, empty or repeated
/// - **500 Internal Server Error**: Upstream failure
///
/// # Response
///
/// ```json
/// {
///   "baseCurrency": "KZT",
///   "rates": { "USD": 0.0021, "EUR": 0.0019, "KZT": 1 }
/// }
/// ```
pub async fn currency_handler(
    State(state): State<AppState>,
    query: Result<Query<CurrencyQuery>, QueryRejection>,
) -> Result<Json<CurrencyResponse>, AppError> {
    let Query(query) = query.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected query string");
        AppError::invalid_request(MISSING_COUNTRY_MESSAGE)
    })?;
    query.validate()?;

    let country = query.country.unwrap_or_default();
    let currency = state.currency_service.get_currency(&country).await?;

    Ok(Json(currency.into()))
}
