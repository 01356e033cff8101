//! Reqwest-backed Alpha Vantage quote source.
//!
//! This adapter owns transport details only: building the `GLOBAL_QUOTE`
//! request, mapping HTTP failures, and decoding the provider body into a
//! domain [`GlobalQuote`]. It makes one request per call and never retries.

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, warn};

use super::dto::{QuotePayload, decode_body};
use crate::USER_AGENT;
use crate::config::{ApiKey, UpstreamSettings};
use crate::domain::Symbol;
use crate::domain::ports::{GlobalQuote, QuoteSource, QuoteSourceError};

const QUERY_PATH: &str = "query";
const QUOTE_FUNCTION: &str = "GLOBAL_QUOTE";

/// Quote source calling the Alpha Vantage `GLOBAL_QUOTE` function.
pub struct AlphaVantageQuoteSource {
    client: Client,
    endpoint: Url,
    api_key: Option<ApiKey>,
}

impl AlphaVantageQuoteSource {
    /// Build the adapter from provider settings.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed or the
    /// query endpoint cannot be derived from the base URL.
    pub fn new(settings: UpstreamSettings) -> Result<Self, QuoteSourceError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| QuoteSourceError::unexpected(err.to_string()))?;
        Self::with_client(client, settings)
    }

    /// Build the adapter around an existing client.
    ///
    /// # Errors
    ///
    /// Returns an error when the query endpoint cannot be derived from the
    /// base URL.
    pub fn with_client(
        client: Client,
        settings: UpstreamSettings,
    ) -> Result<Self, QuoteSourceError> {
        let UpstreamSettings { api_key, base_url } = settings;
        let endpoint = base_url
            .join(QUERY_PATH)
            .map_err(|err| QuoteSourceError::unexpected(format!("invalid base URL: {err}")))?;
        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }

    /// Query endpoint without parameters.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn request_url(&self, symbol: &Symbol, api_key: &ApiKey) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("function", QUOTE_FUNCTION)
            .append_pair("symbol", symbol.as_str())
            .append_pair("apikey", api_key.expose());
        url
    }
}

#[async_trait]
impl QuoteSource for AlphaVantageQuoteSource {
    async fn fetch_quote(&self, symbol: &Symbol) -> Result<GlobalQuote, QuoteSourceError> {
        let api_key = self.api_key.as_ref().ok_or(QuoteSourceError::NotConfigured)?;
        debug!(%symbol, endpoint = %self.endpoint, "requesting global quote");

        let response = self
            .client
            .get(self.request_url(symbol, api_key))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuoteSourceError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(map_transport_error)?;
        match parse_quote(body.as_ref())? {
            QuotePayload::Found(quote) => Ok(quote),
            QuotePayload::Missing { advisory } => {
                if let Some(advisory) = advisory {
                    warn!(%symbol, %advisory, "quote provider sent an advisory instead of a quote");
                }
                Err(QuoteSourceError::not_found(symbol))
            }
        }
    }
}

fn parse_quote(body: &[u8]) -> Result<QuotePayload, QuoteSourceError> {
    decode_body(body).map_err(QuoteSourceError::decode)
}

/// Map a reqwest failure, stripping the request URL so the API key in its
/// query string never reaches logs or error messages.
fn map_transport_error(error: reqwest::Error) -> QuoteSourceError {
    let is_builder = error.is_builder();
    let message = error.without_url().to_string();
    if is_builder {
        QuoteSourceError::unexpected(message)
    } else {
        QuoteSourceError::transport(message)
    }
}
