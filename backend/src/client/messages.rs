//! User-facing text for error codes.
//!
//! The wording differs from the server's own messages for `MISSING_SYMBOL`
//! and covers `RATE_LIMITED`, which the server never emits.

use crate::domain::ErrorCode;

/// Shown for any code outside the known taxonomy.
pub const FALLBACK_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// Text shown to the user for `code`.
pub const fn message_for(code: ErrorCode) -> &'static str {
    match code {
        ErrorCode::MissingSymbol => "Please enter a stock symbol",
        ErrorCode::InvalidSymbol => "Please enter a valid stock symbol (1-5 letters)",
        ErrorCode::ApiUnavailable => {
            "Stock data service is temporarily unavailable. Please try again later."
        }
        ErrorCode::SymbolNotFound => {
            "Stock symbol not found. Please check the symbol and try again."
        }
        ErrorCode::NetworkError => {
            "Network connection error. Please check your internet connection."
        }
        ErrorCode::RateLimited => "Too many requests. Please wait a moment before searching again.",
    }
}

/// Text for a code received over the wire, falling back to
/// [`FALLBACK_MESSAGE`] for unknown codes.
///
/// # Examples
/// ```
/// use stock_calculator::client::{FALLBACK_MESSAGE, user_message};
///
/// assert_eq!(user_message("MISSING_SYMBOL"), "Please enter a stock symbol");
/// assert_eq!(user_message("TEAPOT"), FALLBACK_MESSAGE);
/// ```
pub fn user_message(code: &str) -> &'static str {
    code.parse::<ErrorCode>()
        .map_or(FALLBACK_MESSAGE, message_for)
}
