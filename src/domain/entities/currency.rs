//! Exchange rate entities produced by the currency stage.

/// Currencies every rates lookup must report, in display order.
pub const QUOTED_CURRENCIES: [&str; 3] = ["USD", "EUR", "KZT"];

/// Forward rates: units of each quoted currency per one unit of the base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rates {
    pub usd: f64,
    pub eur: f64,
    pub kzt: f64,
}

impl Rates {
    /// Returns the forward rate for one of [`QUOTED_CURRENCIES`].
    pub fn get(&self, code: &str) -> Option<f64> {
        match code {
            "USD" => Some(self.usd),
            "EUR" => Some(self.eur),
            "KZT" => Some(self.kzt),
            _ => None,
        }
    }
}

/// Exchange rates expressed against the base currency of a country.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyResult {
    /// ISO 4217 code selected from the country table.
    pub base_currency: String,
    pub rates: Rates,
}
