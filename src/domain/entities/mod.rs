//! Transient request/response entities.
//!
//! Every entity is built for a single request and dropped once the response
//! is sent or rendered.

pub mod currency;
pub mod weather;

pub use currency::{CurrencyResult, QUOTED_CURRENCIES, Rates};
pub use weather::{Coordinates, CountryCode, WeatherResult};
