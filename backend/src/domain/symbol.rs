//! Ticker symbol validation.

use std::fmt;

/// Longest accepted ticker, in characters.
pub const MAX_SYMBOL_LEN: usize = 5;

/// Why a raw symbol was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SymbolValidationError {
    /// Nothing was supplied.
    #[error("symbol is empty")]
    Empty,
    /// The input is not 1-5 ASCII letters.
    #[error("symbol must be 1-{MAX_SYMBOL_LEN} ASCII letters")]
    Malformed,
}

/// Uppercased ticker symbol of 1-5 ASCII letters.
///
/// ## Invariants
/// - Matches `^[A-Z]{1,5}$` once constructed.
///
/// # Examples
/// ```
/// use stock_calculator::domain::Symbol;
///
/// let symbol = Symbol::parse("aapl").expect("valid ticker");
/// assert_eq!(symbol.as_str(), "AAPL");
/// assert!(Symbol::parse("BRK.B").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(String);

impl Symbol {
    /// Validate `raw` against `^[A-Za-z]{1,5}$` and normalise it to
    /// uppercase. No trimming is applied.
    pub fn parse(raw: &str) -> Result<Self, SymbolValidationError> {
        if raw.is_empty() {
            return Err(SymbolValidationError::Empty);
        }
        let well_formed =
            raw.len() <= MAX_SYMBOL_LEN && raw.bytes().all(|byte| byte.is_ascii_alphabetic());
        if !well_formed {
            return Err(SymbolValidationError::Malformed);
        }
        Ok(Self(raw.to_ascii_uppercase()))
    }

    /// Borrow the uppercased symbol.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
