//! Handler for the weather endpoint.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use validator::Validate;

use crate::api::dto::weather::{WeatherQuery, WeatherResponse};
use crate::application::services::weather_service::MISSING_CITY_MESSAGE;
use crate::error::AppError;
use crate::state::AppState;

/// Returns current weather for a city.
///
/// # Endpoint
///
/// `GET /api/weather?city={city}`
///
/// # Response Codes
///
/// - **200 OK**: Weather found
/// - **400 Bad Request**: `city` missing, empty or repeated
/// - **404 Not Found**: Upstream does not know the city
/// - **500 Internal Server Error**: Any other upstream failure
///
/// # Response
///
/// ```json
/// {
///   "cityName": "Almaty",
///   "countryCode": "KZ",
///   "temperature": 15.0,
///   "feelsLike": 13.6,
///   "description": "clear sky",
///   "windSpeed": 2.5,
///   "humidity": 40,
///   "pressure": 1018,
///   "coordinates": { "lat": 43.25, "lon": 76.95 },
///   "rain": 0
/// }
/// ```
pub async fn weather_handler(
    State(state): State<AppState>,
    query: Result<Query<WeatherQuery>, QueryRejection>,
) -> Result<Json<WeatherResponse>, AppError> {
    let Query(query) = query.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected query string");
        AppError::invalid_request(MISSING_CITY_MESSAGE)
    })?;
    query.validate()?;

    let city = query.city.unwrap_or_default();
    let weather = state.weather_service.get_weather(&city).await?;

    Ok(Json(weather.into()))
}
