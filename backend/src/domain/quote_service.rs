//! Quote lookup use-case.
//!
//! Validates the caller's symbol, makes a single provider call through the
//! [`QuoteSource`] port, and folds every provider failure into the closed
//! [`ErrorCode`](super::ErrorCode) taxonomy. Nothing escapes as a raw error.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, warn};

use super::ports::{QuoteSource, QuoteSourceError, StockQuoteQuery};
use super::{Error, Quote, Symbol, SymbolValidationError};

/// Domain service backing [`StockQuoteQuery`].
#[derive(Clone)]
pub struct QuoteLookupService {
    source: Arc<dyn QuoteSource>,
}

impl QuoteLookupService {
    /// Build the service over a provider port.
    pub fn new(source: Arc<dyn QuoteSource>) -> Self {
        Self { source }
    }

    fn validate(raw_symbol: Option<&str>) -> Result<Symbol, Error> {
        let Some(raw) = raw_symbol else {
            warn!("stock lookup without a symbol");
            return Err(Error::missing_symbol());
        };
        Symbol::parse(raw).map_err(|err| match err {
            SymbolValidationError::Empty => {
                warn!("stock lookup with an empty symbol");
                Error::missing_symbol()
            }
            SymbolValidationError::Malformed => {
                warn!(symbol = %raw, "rejected malformed symbol");
                Error::invalid_symbol()
            }
        })
    }
}

fn map_source_error(symbol: &Symbol, err: QuoteSourceError) -> Error {
    match err {
        QuoteSourceError::NotConfigured => {
            error!("quote provider API key not configured");
            Error::service_unavailable()
        }
        QuoteSourceError::UpstreamStatus { status } => {
            error!(%symbol, status, "quote provider returned an error status");
            Error::upstream_unavailable()
        }
        QuoteSourceError::NotFound { .. } => {
            warn!(%symbol, "no quote data found for symbol");
            Error::symbol_not_found()
        }
        QuoteSourceError::Transport { message } => {
            error!(%symbol, error = %message, "quote provider unreachable");
            Error::network_error()
        }
        QuoteSourceError::Decode { message } | QuoteSourceError::Unexpected { message } => {
            error!(%symbol, error = %message, "quote lookup failed unexpectedly");
            Error::service_unavailable()
        }
    }
}

#[async_trait]
impl StockQuoteQuery for QuoteLookupService {
    async fn lookup(&self, raw_symbol: Option<&str>) -> Result<Quote, Error> {
        let symbol = Self::validate(raw_symbol)?;
        info!(%symbol, "fetching stock data");

        let raw = self
            .source
            .fetch_quote(&symbol)
            .await
            .map_err(|err| map_source_error(&symbol, err))?;

        let quote = Quote::from(raw);
        info!(
            %symbol,
            current = quote.current_price,
            previous_close = quote.previous_close,
            "fetched stock data"
        );
        Ok(quote)
    }
}
