//! HTTP client for `GET /api/stock/{symbol}`.
//!
//! One request per lookup with no retries. Responses are decoded from the
//! same envelope the server produces.

use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use super::error::ClientError;
use crate::USER_AGENT;
use crate::domain::Quote;
use crate::inbound::http::envelope::StockResponse;

/// Client for a stock calculator deployment.
#[derive(Debug, Clone)]
pub struct StockApiClient {
    client: Client,
    base_url: Url,
}

impl StockApiClient {
    /// Client for the deployment at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Setup`] when the reqwest client cannot be
    /// constructed.
    pub fn new(base_url: Url) -> Result<Self, ClientError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| ClientError::Setup {
                message: err.to_string(),
            })?;
        Ok(Self::with_client(client, base_url))
    }

    /// Client reusing an existing reqwest client.
    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// URL of the quote endpoint for `symbol`, uppercased.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Setup`] when the base URL cannot carry a path.
    pub fn quote_url(&self, symbol: &str) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.path_segments_mut()
            .map_err(|()| ClientError::Setup {
                message: format!("base URL '{}' cannot carry a path", self.base_url),
            })?
            .pop_if_empty()
            .extend(["api", "stock", symbol.to_uppercase().as_str()]);
        Ok(url)
    }

    /// Fetch the quote for `symbol`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Api`] when the server answers with an error envelope.
    /// - [`ClientError::Http`] for a failure status without an envelope.
    /// - [`ClientError::InvalidResponse`] when a success body lacks data.
    /// - [`ClientError::Network`] when the server cannot be reached.
    pub async fn fetch_quote(&self, symbol: &str) -> Result<Quote, ClientError> {
        let url = self.quote_url(symbol)?;
        debug!(%url, "requesting quote");

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(network_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(network_error)?;

        interpret(status, body.as_ref())
    }
}

fn network_error(err: reqwest::Error) -> ClientError {
    ClientError::Network {
        message: err.to_string(),
    }
}

fn interpret(status: StatusCode, body: &[u8]) -> Result<Quote, ClientError> {
    let envelope = serde_json::from_slice::<StockResponse>(body);

    if !status.is_success() {
        return Err(match envelope.ok().and_then(|e| e.error) {
            Some(error) => ClientError::Api {
                code: error.code,
                message: error.message,
            },
            None => ClientError::Http {
                status: status.as_u16(),
            },
        });
    }

    let envelope = envelope.map_err(|err| ClientError::InvalidResponse {
        reason: err.to_string(),
    })?;
    match envelope {
        StockResponse {
            success: true,
            data: Some(quote),
            ..
        } => Ok(quote),
        _ => Err(ClientError::InvalidResponse {
            reason: "missing success flag or data".to_owned(),
        }),
    }
}
