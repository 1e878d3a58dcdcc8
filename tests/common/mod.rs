#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use url::Url;
use weather_currency::application::services::{CurrencyService, WeatherService};
use weather_currency::domain::entities::{Coordinates, CountryCode, Rates, WeatherResult};
use weather_currency::domain::providers::{ProviderError, RatesProvider, WeatherProvider};
use weather_currency::state::AppState;

pub const TEST_WEATHER_KEY: &str = "test-weather-key";
pub const TEST_RATES_KEY: &str = "test-rates-key";

pub fn almaty() -> WeatherResult {
    WeatherResult {
        city_name: "Almaty".to_string(),
        country_code: CountryCode::new("KZ"),
        temperature: 15.0,
        feels_like: 13.6,
        description: "clear sky".to_string(),
        wind_speed: 2.5,
        humidity: 40,
        pressure: 1018,
        coordinates: Coordinates {
            lat: 43.25,
            lon: 76.95,
        },
        rain: 0.0,
    }
}

pub fn kzt_rates() -> Rates {
    Rates {
        usd: 0.0021,
        eur: 0.0019,
        kzt: 1.0,
    }
}

/// Knows Almaty; reports "Nonexistentville" as not found and fails for anything else.
pub struct StubWeatherProvider;

#[async_trait]
impl WeatherProvider for StubWeatherProvider {
    async fn current_weather(&self, city: &str) -> Result<WeatherResult, ProviderError> {
        match city {
            "Almaty" => Ok(almaty()),
            "Nonexistentville" => Err(ProviderError::NotFound),
            _ => Err(ProviderError::Transport("connection refused".to_string())),
        }
    }
}

/// Records every requested base currency.
#[derive(Default)]
pub struct StubRatesProvider {
    pub requested: Mutex<Vec<String>>,
    pub fail: bool,
}

impl StubRatesProvider {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl RatesProvider for StubRatesProvider {
    async fn latest_rates(&self, base_currency: &str) -> Result<Rates, ProviderError> {
        self.requested
            .lock()
            .unwrap()
            .push(base_currency.to_string());

        if self.fail {
            return Err(ProviderError::Status {
                status: 503,
                body: "unavailable".to_string(),
            });
        }

        Ok(kzt_rates())
    }
}

pub fn create_test_state(rates: Arc<StubRatesProvider>) -> AppState {
    AppState::new(
        Arc::new(WeatherService::new(Arc::new(StubWeatherProvider))),
        Arc::new(CurrencyService::new(rates)),
    )
}

/// Serves `app` on an ephemeral local port and returns its base URL.
pub async fn spawn_app(app: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Url::parse(&format!("http://{addr}")).unwrap()
}

/// Stand-in for the OpenWeather current weather API.
pub fn fake_openweather() -> Router {
    Router::new().route("/data/2.5/weather", get(fake_current_weather))
}

async fn fake_current_weather(Query(params): Query<HashMap<String, String>>) -> Response {
    if params.get("appid").map(String::as_str) != Some(TEST_WEATHER_KEY) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "cod": 401, "message": "Invalid API key" })),
        )
            .into_response();
    }

    if params.get("units").map(String::as_str) != Some("metric") {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "cod": "400", "message": "units must be metric" })),
        )
            .into_response();
    }

    match params.get("q").map(String::as_str) {
        Some("Almaty") => Json(json!({
            "coord": { "lon": 76.95, "lat": 43.25 },
            "weather": [{ "id": 800, "main": "Clear", "description": "clear sky", "icon": "01d" }],
            "main": { "temp": 15, "feels_like": 13.6, "pressure": 1018, "humidity": 40 },
            "wind": { "speed": 2.5, "deg": 180 },
            "sys": { "country": "KZ" },
            "name": "Almaty",
            "cod": 200
        }))
        .into_response(),
        Some("London") => Json(json!({
            "coord": { "lon": -0.13, "lat": 51.51 },
            "weather": [{ "description": "light rain" }],
            "main": { "temp": 9.4, "feels_like": 7.1, "pressure": 1009, "humidity": 87 },
            "wind": { "speed": 4.1 },
            "rain": { "1h": 0.6 },
            "sys": { "country": "GB" },
            "name": "London"
        }))
        .into_response(),
        Some("Garbled") => Json(json!({ "name": "Garbled" })).into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({ "cod": "404", "message": "city not found" })),
        )
            .into_response(),
    }
}

/// Stand-in for ExchangeRate-API v6; counts every request it receives.
pub fn fake_exchange_rate(hits: Arc<AtomicUsize>) -> Router {
    Router::new()
        .route("/v6/{key}/latest/{base}", get(fake_latest_rates))
        .with_state(hits)
}

async fn fake_latest_rates(
    State(hits): State<Arc<AtomicUsize>>,
    Path((key, base)): Path<(String, String)>,
) -> Response {
    hits.fetch_add(1, Ordering::SeqCst);

    if key != TEST_RATES_KEY {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({ "result": "error", "error-type": "invalid-key" })),
        )
            .into_response();
    }

    let rates = match base.as_str() {
        "KZT" => json!({ "KZT": 1, "USD": 0.0021, "EUR": 0.0019, "RUB": 0.17 }),
        "USD" => json!({ "USD": 1, "EUR": 0.92, "KZT": 476.19, "GBP": 0.79 }),
        "GBP" => json!({ "GBP": 1, "USD": 1.27, "EUR": 1.17 }),
        _ => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({ "result": "error", "error-type": "unsupported-code" })),
            )
                .into_response();
        }
    };

    Json(json!({
        "result": "success",
        "base_code": base,
        "conversion_rates": rates
    }))
    .into_response()
}
