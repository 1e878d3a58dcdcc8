//! OpenWeather current weather client.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use url::Url;

use super::{transport_error, truncate_body};
use crate::domain::entities::{Coordinates, CountryCode, WeatherResult};
use crate::domain::providers::{ProviderError, WeatherProvider};

const CURRENT_WEATHER_PATH: [&str; 3] = ["data", "2.5", "weather"];

/// Client for `GET /data/2.5/weather` in metric units.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl OpenWeatherClient {
    /// Creates a client rooted at `base_url` (e.g. `https://api.openweathermap.org`).
    pub fn new(http: Client, base_url: Url, api_key: String) -> Self {
        Self {
            http,
            base_url,
            api_key,
        }
    }

    /// Appends the endpoint path, keeping any path prefix of `base_url`.
    fn endpoint(&self) -> Result<Url, ProviderError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ProviderError::Transport("weather base URL cannot be a base".into()))?
            .pop_if_empty()
            .extend(CURRENT_WEATHER_PATH);
        Ok(url)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current_weather(&self, city: &str) -> Result<WeatherResult, ProviderError> {
        let response = self
            .http
            .get(self.endpoint()?)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ProviderError::NotFound);
        }

        let body = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let parsed: OwCurrentResponse =
            serde_json::from_str(&body).map_err(|e| ProviderError::Malformed(e.to_string()))?;

        parsed.try_into()
    }
}

#[derive(Debug, Deserialize)]
struct OwCoord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u32,
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Default, Deserialize)]
struct OwSys {
    country: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct OwRain {
    #[serde(rename = "1h")]
    one_hour: Option<f64>,
    #[serde(rename = "3h")]
    three_hours: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    coord: OwCoord,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    #[serde(default)]
    sys: OwSys,
    #[serde(default)]
    rain: Option<OwRain>,
}

impl TryFrom<OwCurrentResponse> for WeatherResult {
    type Error = ProviderError;

    fn try_from(parsed: OwCurrentResponse) -> Result<Self, Self::Error> {
        let description = parsed
            .weather
            .into_iter()
            .next()
            .map(|w| w.description)
            .ok_or_else(|| ProviderError::Malformed("empty weather array".to_string()))?;

        // 3h accumulation first, then the 1h one newer responses carry.
        let rain = parsed
            .rain
            .and_then(|r| r.three_hours.or(r.one_hour))
            .unwrap_or(0.0);

        Ok(WeatherResult {
            city_name: parsed.name,
            country_code: CountryCode::new(parsed.sys.country.unwrap_or_default()),
            temperature: parsed.main.temp,
            feels_like: parsed.main.feels_like,
            description,
            wind_speed: parsed.wind.speed,
            humidity: parsed.main.humidity,
            pressure: parsed.main.pressure,
            coordinates: Coordinates {
                lat: parsed.coord.lat,
                lon: parsed.coord.lon,
            },
            rain,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn almaty_payload() -> serde_json::Value {
        json!({
            "coord": { "lon": 76.95, "lat": 43.25 },
            "weather": [{ "id": 800, "main": "Clear", "description": "clear sky" }],
            "main": {
                "temp": 15.0,
                "feels_like": 13.6,
                "humidity": 40,
                "pressure": 1018
            },
            "wind": { "speed": 2.5 },
            "sys": { "country": "KZ" },
            "name": "Almaty"
        })
    }

    fn convert(value: serde_json::Value) -> Result<WeatherResult, ProviderError> {
        let parsed: OwCurrentResponse = serde_json::from_value(value).unwrap();
        parsed.try_into()
    }

    #[test]
    fn test_endpoint_keeps_base_path_prefix() {
        let endpoint = |base: &str| {
            OpenWeatherClient::new(Client::new(), Url::parse(base).unwrap(), "k".to_string())
                .endpoint()
                .unwrap()
        };

        assert_eq!(
            endpoint("https://api.openweathermap.org").as_str(),
            "https://api.openweathermap.org/data/2.5/weather"
        );
        assert_eq!(
            endpoint("http://gateway/openweather").as_str(),
            "http://gateway/openweather/data/2.5/weather"
        );
        assert_eq!(
            endpoint("http://gateway/openweather/").as_str(),
            "http://gateway/openweather/data/2.5/weather"
        );
    }

    #[test]
    fn test_convert_full_payload() {
        let weather = convert(almaty_payload()).unwrap();

        assert_eq!(weather.city_name, "Almaty");
        assert_eq!(weather.country_code.as_str(), "KZ");
        assert_eq!(weather.temperature, 15.0);
        assert_eq!(weather.feels_like, 13.6);
        assert_eq!(weather.description, "clear sky");
        assert_eq!(weather.wind_speed, 2.5);
        assert_eq!(weather.humidity, 40);
        assert_eq!(weather.pressure, 1018);
        assert_eq!(weather.coordinates.lat, 43.25);
        assert_eq!(weather.coordinates.lon, 76.95);
        assert_eq!(weather.rain, 0.0);
    }

    #[test]
    fn test_rain_prefers_three_hour_value() {
        let mut payload = almaty_payload();
        payload["rain"] = json!({ "1h": 0.4, "3h": 1.2 });

        assert_eq!(convert(payload).unwrap().rain, 1.2);
    }

    #[test]
    fn test_rain_falls_back_to_one_hour_value() {
        let mut payload = almaty_payload();
        payload["rain"] = json!({ "1h": 0.4 });

        assert_eq!(convert(payload).unwrap().rain, 0.4);
    }

    #[test]
    fn test_missing_country_yields_empty_code() {
        let mut payload = almaty_payload();
        payload["sys"] = json!({});

        assert!(convert(payload).unwrap().country_code.is_empty());
    }

    #[test]
    fn test_empty_weather_array_is_malformed() {
        let mut payload = almaty_payload();
        payload["weather"] = json!([]);

        assert!(matches!(
            convert(payload),
            Err(ProviderError::Malformed(_))
        ));
    }
}
