//! Shared HTTP adapter state.
//!
//! Handlers accept this via `actix_web::web::Data` so they depend only on the
//! domain port and stay testable without network I/O.

use std::sync::Arc;

use crate::config::DEFAULT_CACHE_MAX_AGE;
use crate::domain::ports::StockQuoteQuery;

/// Dependency bundle for the stock handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Quote lookup use-case.
    pub quotes: Arc<dyn StockQuoteQuery>,
    /// `max-age` advertised on successful quote responses.
    pub cache_max_age: u32,
}

impl HttpState {
    /// State with the default cache lifetime.
    pub fn new(quotes: Arc<dyn StockQuoteQuery>) -> Self {
        Self {
            quotes,
            cache_max_age: DEFAULT_CACHE_MAX_AGE,
        }
    }

    /// Override the cache lifetime for successful responses.
    #[must_use]
    pub fn with_cache_max_age(mut self, seconds: u32) -> Self {
        self.cache_max_age = seconds;
        self
    }
}
