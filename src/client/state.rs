//! Explicit UI state of the client.

use crate::domain::entities::{CurrencyResult, WeatherResult};

/// Where a search request stands.
///
/// ```text
/// Idle → Loading → WeatherLoaded → CurrencyLoaded
///                │               └→ CurrencyFailed
///                └→ Error
/// ```
///
/// `Error`, `CurrencyLoaded` and `CurrencyFailed` end a request; the next
/// search starts again from `Loading`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    /// The weather stage failed; the message is shown to the user.
    Error(String),
    /// Weather is shown, currency is still being fetched.
    WeatherLoaded(WeatherResult),
    CurrencyLoaded {
        weather: WeatherResult,
        currency: CurrencyResult,
    },
    /// Weather is shown; the currency panel stays hidden and no error is shown.
    CurrencyFailed(WeatherResult),
}

impl UiState {
    /// Returns true once no further transition will happen for this request.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            UiState::Error(_) | UiState::CurrencyLoaded { .. } | UiState::CurrencyFailed(_)
        )
    }

    /// Weather displayed in this state, if any.
    pub fn weather(&self) -> Option<&WeatherResult> {
        match self {
            UiState::WeatherLoaded(weather)
            | UiState::CurrencyLoaded { weather, .. }
            | UiState::CurrencyFailed(weather) => Some(weather),
            _ => None,
        }
    }
}
