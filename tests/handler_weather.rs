mod common;

use axum::Router;
use axum::http::StatusCode;
use axum_test::TestServer;
use std::sync::Arc;
use weather_currency::api::routes::api_routes;

fn test_server() -> TestServer {
    let state = common::create_test_state(Arc::new(common::StubRatesProvider::default()));
    let app = Router::new().nest("/api", api_routes()).with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_weather_success_returns_all_fields() {
    let server = test_server();

    let response = server
        .get("/api/weather")
        .add_query_param("city", "Almaty")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["cityName"], "Almaty");
    assert_eq!(json["countryCode"], "KZ");
    assert_eq!(json["temperature"], 15.0);
    assert_eq!(json["feelsLike"], 13.6);
    assert_eq!(json["description"], "clear sky");
    assert_eq!(json["windSpeed"], 2.5);
    assert_eq!(json["humidity"], 40);
    assert_eq!(json["pressure"], 1018);
    assert_eq!(json["coordinates"]["lat"], 43.25);
    assert_eq!(json["coordinates"]["lon"], 76.95);
    assert_eq!(json["rain"], 0.0);
}

#[tokio::test]
async fn test_weather_missing_city() {
    let server = test_server();

    let response = server.get("/api/weather").await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Please provide a city name");
}

#[tokio::test]
async fn test_weather_empty_city() {
    let server = test_server();

    for city in ["", "   "] {
        let response = server.get("/api/weather").add_query_param("city", city).await;

        response.assert_status(StatusCode::BAD_REQUEST);

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"], "Please provide a city name");
    }
}

#[tokio::test]
async fn test_weather_city_not_found() {
    let server = test_server();

    let response = server
        .get("/api/weather")
        .add_query_param("city", "Nonexistentville")
        .await;

    response.assert_status(StatusCode::NOT_FOUND);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "City not found");
}

#[tokio::test]
async fn test_weather_upstream_failure() {
    let server = test_server();

    let response = server
        .get("/api/weather")
        .add_query_param("city", "Atlantis")
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Server error while fetching weather data");
}

#[tokio::test]
async fn test_weather_repeated_city_is_json_error() {
    let server = test_server();

    let response = server
        .get("/api/weather")
        .add_query_param("city", "Almaty")
        .add_query_param("city", "Paris")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.header("content-type").to_str().unwrap(),
        "application/json"
    );

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Please provide a city name");
}
