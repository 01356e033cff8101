//! DTOs for decoding Alpha Vantage `GLOBAL_QUOTE` responses.
//!
//! The provider keys fields with ordinal prefixes and sends every value as a
//! string. Unknown symbols come back as `{"Global Quote": {}}` with status
//! 200, and throttled keys get a top-level `Note` or `Information` message
//! instead of a quote.
//!
//! Fields are held as raw JSON values: any body that is valid JSON but lacks
//! a quote object with a non-empty `01. symbol` string is a missing quote,
//! whatever shape the provider chose. Only non-JSON bodies and unusable
//! prices are decode failures.

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::warn;

use crate::domain::ports::GlobalQuote;

const SYMBOL_FIELD: &str = "01. symbol";
const PRICE_FIELD: &str = "05. price";
const TRADING_DAY_FIELD: &str = "07. latest trading day";
const PREVIOUS_CLOSE_FIELD: &str = "08. previous close";

#[derive(Debug, Default, Deserialize)]
pub(super) struct GlobalQuoteResponseDto {
    #[serde(rename = "Global Quote", default)]
    pub(super) global_quote: Option<Value>,
    #[serde(rename = "Note", default)]
    pub(super) note: Option<Value>,
    #[serde(rename = "Information", default)]
    pub(super) information: Option<Value>,
}

/// Outcome of interpreting a decoded body.
#[derive(Debug, PartialEq)]
pub(super) enum QuotePayload {
    Found(GlobalQuote),
    /// No quote object or no symbol in it. Carries any provider advisory.
    Missing { advisory: Option<String> },
}

/// Decode a raw provider body.
///
/// Errors only when the body is not JSON or a located quote carries prices
/// that cannot be used.
pub(super) fn decode_body(body: &[u8]) -> Result<QuotePayload, String> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|error| format!("invalid Alpha Vantage JSON payload: {error}"))?;
    let dto = match value {
        Value::Object(_) => {
            serde_json::from_value::<GlobalQuoteResponseDto>(value).map_err(|e| e.to_string())?
        }
        _ => GlobalQuoteResponseDto::default(),
    };
    dto.into_payload()
}

impl GlobalQuoteResponseDto {
    pub(super) fn into_payload(self) -> Result<QuotePayload, String> {
        let advisory = self
            .note
            .and_then(advisory_text)
            .or_else(|| self.information.and_then(advisory_text));
        let Some(Value::Object(quote)) = self.global_quote else {
            return Ok(QuotePayload::Missing { advisory });
        };
        let Some(symbol) = non_empty_str(&quote, SYMBOL_FIELD) else {
            return Ok(QuotePayload::Missing { advisory });
        };

        let price = parse_price(&quote, PRICE_FIELD)?;
        let previous_close = parse_price(&quote, PREVIOUS_CLOSE_FIELD)?;
        let latest_trading_day = non_empty_str(&quote, TRADING_DAY_FIELD).unwrap_or_else(|| {
            warn!(%symbol, "quote has no latest trading day; reporting it as empty");
            String::new()
        });
        Ok(QuotePayload::Found(GlobalQuote {
            symbol,
            price,
            previous_close,
            latest_trading_day,
        }))
    }
}

fn non_empty_str(quote: &Map<String, Value>, field: &str) -> Option<String> {
    quote
        .get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

fn advisory_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

fn parse_price(quote: &Map<String, Value>, field: &str) -> Result<f64, String> {
    let value = match quote.get(field) {
        Some(Value::String(raw)) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("field '{field}' is not a number: '{raw}'"))?,
        Some(Value::Number(number)) => number
            .as_f64()
            .ok_or_else(|| format!("field '{field}' is out of range: {number}"))?,
        Some(other) => return Err(format!("field '{field}' is not a number: {other}")),
        None => return Err(format!("missing field '{field}'")),
    };
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("field '{field}' is not finite: {value}"))
    }
}
