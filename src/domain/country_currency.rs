//! Static country → currency table used to pick the base currency.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Currency used when a country is absent from the table.
pub const DEFAULT_CURRENCY: &str = "USD";

static COUNTRY_CURRENCIES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("US", "USD"),
        ("GB", "GBP"),
        ("EU", "EUR"),
        ("JP", "JPY"),
        ("CN", "CNY"),
        ("KZ", "KZT"),
        ("RU", "RUB"),
        ("CA", "CAD"),
        ("AU", "AUD"),
        ("IN", "INR"),
        ("BR", "BRL"),
        ("MX", "MXN"),
        ("KR", "KRW"),
        ("TR", "TRY"),
        ("SA", "SAR"),
        ("AE", "AED"),
        ("CH", "CHF"),
        ("SE", "SEK"),
        ("NO", "NOK"),
        ("PL", "PLN"),
        ("TH", "THB"),
        ("MY", "MYR"),
        ("SG", "SGD"),
        ("NZ", "NZD"),
        ("ZA", "ZAR"),
    ])
});

/// Looks up the currency of a country, ignoring ASCII case.
///
/// Returns `None` for countries outside the table.
pub fn lookup(country_code: &str) -> Option<&'static str> {
    COUNTRY_CURRENCIES
        .get(country_code.trim().to_ascii_uppercase().as_str())
        .copied()
}

/// Resolves the base currency for a country, falling back to [`DEFAULT_CURRENCY`].
pub fn resolve_base_currency(country_code: &str) -> &'static str {
    lookup(country_code).unwrap_or(DEFAULT_CURRENCY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_twenty_five_entries() {
        assert_eq!(COUNTRY_CURRENCIES.len(), 25);
    }

    #[test]
    fn test_known_countries_resolve_to_mapped_currency() {
        assert_eq!(resolve_base_currency("KZ"), "KZT");
        assert_eq!(resolve_base_currency("GB"), "GBP");
        assert_eq!(resolve_base_currency("JP"), "JPY");
        assert_eq!(resolve_base_currency("ZA"), "ZAR");
        assert_eq!(resolve_base_currency("US"), "USD");
    }

    #[test]
    fn test_every_table_entry_is_used_as_base() {
        for (country, currency) in COUNTRY_CURRENCIES.iter() {
            assert_eq!(resolve_base_currency(country), *currency);
        }
    }

    #[test]
    fn test_unknown_countries_fall_back_to_usd() {
        assert_eq!(resolve_base_currency("FR"), DEFAULT_CURRENCY);
        assert_eq!(resolve_base_currency("XX"), DEFAULT_CURRENCY);
        assert_eq!(resolve_base_currency(""), DEFAULT_CURRENCY);
        assert_eq!(lookup("FR"), None);
    }

    #[test]
    fn test_lookup_ignores_case_and_whitespace() {
        assert_eq!(lookup("kz"), Some("KZT"));
        assert_eq!(lookup(" Ru "), Some("RUB"));
    }
}
