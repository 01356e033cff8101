//! Client-side failures.

use super::messages::{FALLBACK_MESSAGE, user_message};
use crate::domain::ErrorCode;

/// Why a lookup produced no quote.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// Input was rejected before any request was made.
    #[error("invalid stock symbol input '{input}'")]
    InvalidSymbol { input: String },
    /// The API answered with an error envelope.
    #[error("{code}: {message}")]
    Api { code: String, message: String },
    /// The API answered with a failure status and no error envelope.
    #[error("HTTP {status}")]
    Http { status: u16 },
    /// The API answered successfully but the body was not a usable envelope.
    #[error("invalid response format from API: {reason}")]
    InvalidResponse { reason: String },
    /// The API could not be reached.
    #[error("network connection error: {message}")]
    Network { message: String },
    /// The HTTP client could not be set up.
    #[error("HTTP client setup failed: {message}")]
    Setup { message: String },
}

impl ClientError {
    /// Error code associated with the failure, if any.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::InvalidSymbol { .. } => Some(ErrorCode::InvalidSymbol.as_str()),
            Self::Api { code, .. } => Some(code.as_str()),
            Self::Network { .. } => Some(ErrorCode::NetworkError.as_str()),
            Self::Http { .. } | Self::InvalidResponse { .. } | Self::Setup { .. } => None,
        }
    }

    /// Text to show the user.
    pub fn user_message(&self) -> &'static str {
        self.code().map_or(FALLBACK_MESSAGE, user_message)
    }
}
