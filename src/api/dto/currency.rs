//! DTOs for the currency endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{CurrencyResult, Rates};

/// Query string of `GET /api/currency`.
#[derive(Debug, Deserialize, Validate)]
pub struct CurrencyQuery {
    #[validate(
        required(message = "Please provide a country code"),
        length(min = 1, message = "Please provide a country code")
    )]
    pub country: Option<String>,
}

/// Rates keyed by ISO 4217 code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatesDto {
    #[serde(rename = "USD")]
    pub usd: f64,
    #[serde(rename = "EUR")]
    pub eur: f64,
    #[serde(rename = "KZT")]
    pub kzt: f64,
}

/// Currency payload returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyResponse {
    pub base_currency: String,
    pub rates: RatesDto,
}

impl From<CurrencyResult> for CurrencyResponse {
    fn from(currency: CurrencyResult) -> Self {
        Self {
            base_currency: currency.base_currency,
            rates: RatesDto {
                usd: currency.rates.usd,
                eur: currency.rates.eur,
                kzt: currency.rates.kzt,
            },
        }
    }
}

impl From<CurrencyResponse> for CurrencyResult {
    fn from(dto: CurrencyResponse) -> Self {
        Self {
            base_currency: dto.base_currency,
            rates: Rates {
                usd: dto.rates.usd,
                eur: dto.rates.eur,
                kzt: dto.rates.kzt,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_currency_response_shape() {
        let response = CurrencyResponse::from(CurrencyResult {
            base_currency: "KZT".to_string(),
            rates: Rates {
                usd: 0.0021,
                eur: 0.0019,
                kzt: 1.0,
            },
        });

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "baseCurrency": "KZT",
                "rates": { "USD": 0.0021, "EUR": 0.0019, "KZT": 1.0 }
            })
        );
    }
}
