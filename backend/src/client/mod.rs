//! Client library for the stock endpoint.
//!
//! Purpose: everything a front end needs around `GET /api/stock/{symbol}`.
//! Input filtering and validation run before any request; responses are
//! decoded from the shared envelope; error codes map to user-facing text; a
//! quote renders alongside its six price targets.
//!
//! Public surface:
//! - input: keystroke filter and the pre-request validity check.
//! - messages: user-facing text per error code.
//! - StockApiClient: one request per lookup, no retries.
//! - QuoteReport: plain-text rendering of a quote and its targets.
//! - DeploymentVerifier: smoke checks against a running deployment.

pub mod api;
pub mod error;
pub mod input;
pub mod messages;
pub mod report;
pub mod verify;

pub use api::StockApiClient;
pub use error::ClientError;
pub use input::{is_valid_symbol, normalise_input, prepare_symbol};
pub use messages::{FALLBACK_MESSAGE, message_for, user_message};
pub use report::QuoteReport;
pub use verify::{CheckReport, DeploymentVerifier, Finding, FindingLevel, VerificationReport};
