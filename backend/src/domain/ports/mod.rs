//! Domain ports and supporting types for the hexagonal boundary.

mod quote_source;
mod stock_quote_query;

#[cfg(test)]
pub use quote_source::MockQuoteSource;
pub use quote_source::{FixtureQuoteSource, GlobalQuote, QuoteSource, QuoteSourceError};
pub use stock_quote_query::StockQuoteQuery;
