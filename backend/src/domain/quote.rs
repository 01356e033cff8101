//! Normalised quote returned to clients.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ports::GlobalQuote;
use super::price::round_to_cents;

/// Current and previous-close prices for one symbol.
///
/// Built fresh for every request from the provider's payload; prices are
/// rounded to cents, `symbol` and `last_updated` are passed through verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Ticker as echoed by the provider.
    #[schema(example = "AAPL")]
    pub symbol: String,
    /// Latest traded price.
    #[schema(example = 150.01)]
    pub current_price: f64,
    /// Close of the previous trading session.
    #[schema(example = 148.0)]
    pub previous_close: f64,
    /// Latest trading day reported by the provider.
    #[schema(example = "2024-05-17")]
    pub last_updated: String,
}

impl From<GlobalQuote> for Quote {
    fn from(raw: GlobalQuote) -> Self {
        Self {
            symbol: raw.symbol,
            current_price: round_to_cents(raw.price),
            previous_close: round_to_cents(raw.previous_close),
            last_updated: raw.latest_trading_day,
        }
    }
}
