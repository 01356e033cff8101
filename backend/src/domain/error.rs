//! Domain-level error types.
//!
//! These errors are transport agnostic. The HTTP adapter maps each
//! [`FailureOrigin`] to a status code and wraps the payload in the JSON
//! envelope; the client library reuses [`ErrorCode`] to recognise codes it
//! receives over the wire.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::middleware::trace::TraceId;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// No symbol was supplied.
    MissingSymbol,
    /// The symbol is not 1-5 ASCII letters.
    InvalidSymbol,
    /// The quote provider could not be used (missing key, upstream failure,
    /// or an unclassified fault).
    ApiUnavailable,
    /// The provider response carried no quote for the symbol.
    SymbolNotFound,
    /// The provider could not be reached at the transport level.
    NetworkError,
    /// Reserved for provider throttling. Known to clients, never emitted by
    /// the server.
    RateLimited,
}

impl ErrorCode {
    /// Every code in the taxonomy, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::MissingSymbol,
        Self::InvalidSymbol,
        Self::ApiUnavailable,
        Self::SymbolNotFound,
        Self::NetworkError,
        Self::RateLimited,
    ];

    /// Wire representation of the code.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingSymbol => "MISSING_SYMBOL",
            Self::InvalidSymbol => "INVALID_SYMBOL",
            Self::ApiUnavailable => "API_UNAVAILABLE",
            Self::SymbolNotFound => "SYMBOL_NOT_FOUND",
            Self::NetworkError => "NETWORK_ERROR",
            Self::RateLimited => "RATE_LIMITED",
        }
    }

    /// Message the server returns alongside the code.
    pub const fn message(self) -> &'static str {
        match self {
            Self::MissingSymbol => "Stock symbol is required",
            Self::InvalidSymbol => "Please enter a valid stock symbol (1-5 letters)",
            Self::ApiUnavailable => {
                "Stock data service is temporarily unavailable. Please try again later."
            }
            Self::SymbolNotFound => {
                "Stock symbol not found. Please check the symbol and try again."
            }
            Self::NetworkError => "Network connection error. Please check your internet connection.",
            Self::RateLimited => "Too many requests. Please wait a moment before searching again.",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a wire string does not name a known [`ErrorCode`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown error code: {0}")]
pub struct UnknownErrorCode(pub String);

impl FromStr for ErrorCode {
    type Err = UnknownErrorCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| UnknownErrorCode(s.to_owned()))
    }
}

/// Where a failure originated. Adapters derive their status codes from this
/// rather than from [`ErrorCode`], because `API_UNAVAILABLE` is reported both
/// for local faults and for upstream failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureOrigin {
    /// The caller supplied unusable input.
    Request,
    /// The upstream answered but had no quote for the symbol.
    Lookup,
    /// The upstream failed or could not be reached.
    Upstream,
    /// Local configuration or an unclassified fault.
    Service,
}

/// Domain error payload.
///
/// # Examples
/// ```
/// use stock_calculator::domain::{Error, ErrorCode, FailureOrigin};
///
/// let err = Error::invalid_symbol();
/// assert_eq!(err.code(), ErrorCode::InvalidSymbol);
/// assert_eq!(err.origin(), FailureOrigin::Request);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    origin: FailureOrigin,
    message: String,
    trace_id: Option<String>,
}

impl Error {
    /// Create an error with the code's standard message.
    ///
    /// Captures the current trace identifier if one is in scope so the error
    /// payload is correlated automatically.
    pub fn new(code: ErrorCode, origin: FailureOrigin) -> Self {
        Self {
            code,
            origin,
            message: code.message().to_owned(),
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }

    /// No symbol was supplied.
    pub fn missing_symbol() -> Self {
        Self::new(ErrorCode::MissingSymbol, FailureOrigin::Request)
    }

    /// The symbol failed validation.
    pub fn invalid_symbol() -> Self {
        Self::new(ErrorCode::InvalidSymbol, FailureOrigin::Request)
    }

    /// The upstream had no quote for the symbol.
    pub fn symbol_not_found() -> Self {
        Self::new(ErrorCode::SymbolNotFound, FailureOrigin::Lookup)
    }

    /// The upstream could not be reached.
    pub fn network_error() -> Self {
        Self::new(ErrorCode::NetworkError, FailureOrigin::Upstream)
    }

    /// The upstream answered with a non-success status.
    pub fn upstream_unavailable() -> Self {
        Self::new(ErrorCode::ApiUnavailable, FailureOrigin::Upstream)
    }

    /// Local configuration is incomplete or an unexpected fault occurred.
    pub fn service_unavailable() -> Self {
        Self::new(ErrorCode::ApiUnavailable, FailureOrigin::Service)
    }

    /// Attach a trace identifier to the error.
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Failure origin used by adapters to pick a status.
    pub fn origin(&self) -> FailureOrigin {
        self.origin
    }

    /// Human-readable message returned to clients.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Correlation identifier captured at construction time.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for Error {}
