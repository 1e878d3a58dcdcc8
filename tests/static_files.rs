mod common;

use axum::ServiceExt;
use axum::extract::Request;
use axum::http::StatusCode;
use axum_test::TestServer;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use weather_currency::routes::app_router;

/// Writes a small static site: `index.html`, `app.js` and `docs/index.html`.
fn static_site(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "weather-currency-{name}-{}",
        std::process::id()
    ));
    std::fs::create_dir_all(dir.join("docs")).unwrap();
    std::fs::write(dir.join("index.html"), "<h1>Weather</h1>").unwrap();
    std::fs::write(dir.join("app.js"), "console.log('ready');").unwrap();
    std::fs::write(dir.join("docs").join("index.html"), "<h1>Docs</h1>").unwrap();
    dir
}

fn test_server(static_dir: &Path) -> TestServer {
    let state = common::create_test_state(Arc::new(common::StubRatesProvider::default()));
    let app = app_router(state, static_dir);

    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}

#[tokio::test]
async fn test_root_serves_index_html() {
    let dir = static_site("root");
    let server = test_server(&dir);

    let response = server.get("/").await;

    response.assert_status_ok();
    response.assert_text("<h1>Weather</h1>");
}

#[tokio::test]
async fn test_static_file_is_served() {
    let dir = static_site("file");
    let server = test_server(&dir);

    let response = server.get("/app.js").await;

    response.assert_status_ok();
    response.assert_text("console.log('ready');");
}

#[tokio::test]
async fn test_subdirectory_with_trailing_slash_does_not_redirect() {
    let dir = static_site("subdir");
    let server = test_server(&dir);

    for path in ["/docs/", "/docs"] {
        let response = server.get(path).await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert!(response.maybe_header("location").is_none());
    }
}

#[tokio::test]
async fn test_api_routes_still_accept_trailing_slash() {
    let dir = static_site("api");
    let server = test_server(&dir);

    let response = server
        .get("/api/weather/")
        .add_query_param("city", "Almaty")
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["cityName"], "Almaty");
}
