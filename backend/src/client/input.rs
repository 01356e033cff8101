//! Symbol input handling ahead of any request.
//!
//! These checks only short-circuit obviously bad input; the server validates
//! every symbol again.

use super::error::ClientError;
use crate::domain::MAX_SYMBOL_LEN;

/// Filter raw keystrokes the way the search box does: uppercase, drop
/// anything that is not `A-Z`, keep at most five characters.
///
/// # Examples
/// ```
/// use stock_calculator::client::normalise_input;
///
/// assert_eq!(normalise_input("brk.b"), "BRKB");
/// assert_eq!(normalise_input("googl2024"), "GOOGL");
/// ```
pub fn normalise_input(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_uppercase)
        .filter(char::is_ascii_uppercase)
        .take(MAX_SYMBOL_LEN)
        .collect()
}

/// `true` for 1-5 uppercase ASCII letters.
pub fn is_valid_symbol(candidate: &str) -> bool {
    (1..=MAX_SYMBOL_LEN).contains(&candidate.len())
        && candidate.bytes().all(|b| b.is_ascii_uppercase())
}

/// Filter and check `raw`, yielding the symbol to request.
///
/// # Errors
///
/// Returns [`ClientError::InvalidSymbol`] when nothing usable remains after
/// filtering.
pub fn prepare_symbol(raw: &str) -> Result<String, ClientError> {
    let symbol = normalise_input(raw.trim());
    if is_valid_symbol(&symbol) {
        Ok(symbol)
    } else {
        Err(ClientError::InvalidSymbol {
            input: raw.to_owned(),
        })
    }
}
