//! Stock price calculator library.
//!
//! The server side validates a ticker, proxies one `GLOBAL_QUOTE` request to
//! Alpha Vantage and answers with a normalised quote or a stable error
//! envelope. The client side mirrors the browser calculator: input filtering,
//! message mapping, price targets, and deployment verification.

pub mod client;
pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// `User-Agent` sent on every outbound request, to the provider and to a
/// deployment alike.
pub const USER_AGENT: &str = "Stock-Calculator/1.0";

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
/// Request tracing middleware.
pub use middleware::Trace;
