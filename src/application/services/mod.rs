//! Business logic services for the application layer.

pub mod currency_service;
pub mod weather_service;

pub use currency_service::CurrencyService;
pub use weather_service::WeatherService;
