//! Driven port for fetching raw quotes from the market data provider.
//!
//! The domain owns the request and response shapes so the lookup service can
//! classify failures without knowing which provider sits behind the port.

use async_trait::async_trait;

use crate::domain::Symbol;

/// Provider quote before normalisation. Prices are unrounded.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalQuote {
    /// Ticker echoed by the provider.
    pub symbol: String,
    /// Latest traded price.
    pub price: f64,
    /// Close of the previous trading session.
    pub previous_close: f64,
    /// Latest trading day as reported, typically `YYYY-MM-DD`.
    pub latest_trading_day: String,
}

/// Errors surfaced while calling the quote provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuoteSourceError {
    /// No API key is configured, so no request was made.
    #[error("quote provider API key is not configured")]
    NotConfigured,
    /// The provider could not be reached or the exchange broke off.
    #[error("quote provider transport failed: {message}")]
    Transport { message: String },
    /// The provider answered with a non-success HTTP status.
    #[error("quote provider returned status {status}")]
    UpstreamStatus { status: u16 },
    /// The provider answered without a quote for the symbol.
    #[error("quote provider has no quote for {symbol}")]
    NotFound { symbol: String },
    /// The provider body was not JSON, or a quote carried unusable prices.
    #[error("quote provider response decode failed: {message}")]
    Decode { message: String },
    /// Any other failure, such as a request that could not be built.
    #[error("quote provider call failed: {message}")]
    Unexpected { message: String },
}

impl QuoteSourceError {
    /// Transport failure with a diagnostic message.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Decode failure with a diagnostic message.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Unclassified failure with a diagnostic message.
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Missing quote for `symbol`.
    pub fn not_found(symbol: &Symbol) -> Self {
        Self::NotFound {
            symbol: symbol.to_string(),
        }
    }
}

/// Port for looking up one quote from the provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetch the latest quote for `symbol`. Implementations make at most one
    /// outbound request and never retry.
    async fn fetch_quote(&self, symbol: &Symbol) -> Result<GlobalQuote, QuoteSourceError>;
}

/// Fixture source answering every symbol with the same prices.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureQuoteSource;

#[async_trait]
impl QuoteSource for FixtureQuoteSource {
    async fn fetch_quote(&self, symbol: &Symbol) -> Result<GlobalQuote, QuoteSourceError> {
        Ok(GlobalQuote {
            symbol: symbol.to_string(),
            price: 150.005,
            previous_close: 148.0,
            latest_trading_day: "2024-05-17".to_owned(),
        })
    }
}
