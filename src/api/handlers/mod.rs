//! HTTP request handlers for API endpoints.

pub mod currency;
pub mod health;
pub mod weather;

pub use currency::currency_handler;
pub use health::health_handler;
pub use weather::weather_handler;
