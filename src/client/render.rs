//! Pure mapping from [`UiState`] to what the user sees.

use crate::client::state::UiState;
use crate::domain::entities::{CurrencyResult, QUOTED_CURRENCIES, WeatherResult};

/// Everything visible on screen for a given state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Display {
    pub loading: bool,
    pub error: Option<String>,
    pub weather: Option<WeatherPanel>,
    pub currency: Option<CurrencyPanel>,
}

/// Formatted weather fields.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherPanel {
    /// `"Almaty, KZ"`
    pub city: String,
    pub temperature: String,
    pub description: String,
    pub feels_like: String,
    pub wind_speed: String,
    pub humidity: String,
    pub pressure: String,
    pub coordinates: String,
    pub country: String,
    pub rain: String,
}

/// Formatted exchange rates.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyPanel {
    pub base_label: String,
    pub base_currency: String,
    pub rows: Vec<RateRow>,
}

/// One quoted currency in both directions.
#[derive(Debug, Clone, PartialEq)]
pub struct RateRow {
    pub code: String,
    /// Units of `code` per one unit of the base currency.
    pub forward: String,
    /// Units of the base currency per one unit of `code`.
    pub inverse: String,
}

pub fn render(state: &UiState) -> Display {
    match state {
        UiState::Idle => Display::default(),
        UiState::Loading => Display {
            loading: true,
            ..Display::default()
        },
        UiState::Error(message) => Display {
            error: Some(message.clone()),
            ..Display::default()
        },
        UiState::WeatherLoaded(weather) | UiState::CurrencyFailed(weather) => Display {
            weather: Some(weather_panel(weather)),
            ..Display::default()
        },
        UiState::CurrencyLoaded { weather, currency } => Display {
            weather: Some(weather_panel(weather)),
            currency: Some(currency_panel(currency)),
            ..Display::default()
        },
    }
}

pub fn weather_panel(weather: &WeatherResult) -> WeatherPanel {
    WeatherPanel {
        city: format!("{}, {}", weather.city_name, weather.country_code),
        temperature: format!("{}°C", round_half_up(weather.temperature)),
        description: weather.description.clone(),
        feels_like: format!("{}°C", round_half_up(weather.feels_like)),
        wind_speed: format!("{} m/s", weather.wind_speed),
        humidity: format!("{}%", weather.humidity),
        pressure: format!("{} hPa", weather.pressure),
        coordinates: format!(
            "{:.2}, {:.2}",
            weather.coordinates.lat, weather.coordinates.lon
        ),
        country: weather.country_code.to_string(),
        rain: if weather.rain > 0.0 {
            format!("{} mm", weather.rain)
        } else {
            "No rain".to_string()
        },
    }
}

pub fn currency_panel(currency: &CurrencyResult) -> CurrencyPanel {
    let rows = QUOTED_CURRENCIES
        .iter()
        .filter_map(|&code| {
            let rate = currency.rates.get(code)?;
            let (forward_digits, inverse_digits) = precision(code);
            Some(RateRow {
                code: code.to_string(),
                forward: format!("{:.*}", forward_digits, rate),
                inverse: format_inverse(rate, inverse_digits),
            })
        })
        .collect();

    CurrencyPanel {
        base_label: format!("Base currency: {}", currency.base_currency),
        base_currency: currency.base_currency.clone(),
        rows,
    }
}

/// Decimal places for the forward and inverse rate of a quoted currency.
fn precision(code: &str) -> (usize, usize) {
    match code {
        "KZT" => (2, 6),
        _ => (4, 4),
    }
}

fn format_inverse(rate: f64, digits: usize) -> String {
    let inverse = 1.0 / rate;
    if inverse.is_finite() {
        format!("{:.*}", digits, inverse)
    } else {
        "n/a".to_string()
    }
}

/// Rounds to the nearest integer with ties toward positive infinity.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
