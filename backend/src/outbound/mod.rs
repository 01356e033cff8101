//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! Adapters are thin translators that convert between domain types and
//! provider-specific representations. They contain no business logic.
//!
//! - **alpha_vantage**: reqwest-backed `QuoteSource` for the `GLOBAL_QUOTE`
//!   endpoint.

pub mod alpha_vantage;
