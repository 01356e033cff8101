//! Alpha Vantage outbound adapter.
//!
//! This module provides a thin HTTP implementation of the `QuoteSource` port
//! backed by the `GLOBAL_QUOTE` endpoint.

mod dto;
mod http_source;

pub use http_source::AlphaVantageQuoteSource;
