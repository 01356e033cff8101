//! Driving port for stock quote lookups.
//!
//! The HTTP adapter hands the raw path segment to this port and renders
//! whatever comes back; validation and failure classification live behind it.

use async_trait::async_trait;

use crate::domain::{Error, Quote};

/// Domain use-case port for resolving one symbol to a quote.
#[async_trait]
pub trait StockQuoteQuery: Send + Sync {
    /// Look up `raw_symbol` exactly as the caller supplied it. `None` means
    /// the caller sent no symbol at all.
    async fn lookup(&self, raw_symbol: Option<&str>) -> Result<Quote, Error>;
}
