//! JSON envelope shared by every `/api/stock` response.
//!
//! ```text
//! {"success": true,  "data":  {"symbol": "AAPL", ...}}
//! {"success": false, "error": {"code": "INVALID_SYMBOL", "message": "..."}}
//! ```
//!
//! Exactly one of `data` and `error` is present. The types also implement
//! `Deserialize` so the client library decodes the same shapes it is served.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, Quote};

/// Error half of the envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Machine-readable code. Kept as text so clients tolerate codes added
    /// after they were built.
    #[schema(example = "INVALID_SYMBOL")]
    pub code: String,
    /// Human-readable description.
    #[schema(example = "Please enter a valid stock symbol (1-5 letters)")]
    pub message: String,
}

impl ErrorBody {
    /// Parse `code` into the known taxonomy.
    pub fn error_code(&self) -> Option<ErrorCode> {
        self.code.parse().ok()
    }
}

impl From<&Error> for ErrorBody {
    fn from(err: &Error) -> Self {
        Self {
            code: err.code().as_str().to_owned(),
            message: err.message().to_owned(),
        }
    }
}

/// Response envelope for the stock endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StockResponse {
    /// `true` when `data` is present.
    pub success: bool,
    /// Quote on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Quote>,
    /// Failure details otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

impl StockResponse {
    /// Successful envelope around `quote`.
    pub fn ok(quote: Quote) -> Self {
        Self {
            success: true,
            data: Some(quote),
            error: None,
        }
    }

    /// Failed envelope describing `err`.
    pub fn failure(err: &Error) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ErrorBody::from(err)),
        }
    }
}
