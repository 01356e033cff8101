//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use stock_calculator::config::{DEFAULT_CACHE_MAX_AGE, ServiceSettings};
use stock_calculator::domain::ports::QuoteSource;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) cache_max_age: u32,
    pub(crate) quote_source: Arc<dyn QuoteSource>,
}

impl ServerConfig {
    /// Configuration serving quotes from `quote_source` on `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, quote_source: Arc<dyn QuoteSource>) -> Self {
        Self {
            bind_addr,
            cache_max_age: DEFAULT_CACHE_MAX_AGE,
            quote_source,
        }
    }

    /// Configuration derived from environment settings.
    #[must_use]
    pub fn from_settings(settings: &ServiceSettings, quote_source: Arc<dyn QuoteSource>) -> Self {
        Self::new(settings.bind_addr, quote_source).with_cache_max_age(settings.cache_max_age)
    }

    /// Override the `max-age` advertised on successful quote responses.
    #[must_use]
    pub fn with_cache_max_age(mut self, seconds: u32) -> Self {
        self.cache_max_age = seconds;
        self
    }
}
