//! Domain primitives and use-cases.
//!
//! Purpose: define the strongly typed quote model, the price-target maths, the
//! closed error taxonomy, and the lookup service that sits between the HTTP
//! adapter and the quote provider port.
//!
//! Public surface:
//! - Symbol: validated, uppercased ticker.
//! - Quote: normalised quote returned to clients.
//! - PriceTargets: six rounded percentage targets from the previous close.
//! - Error / ErrorCode / FailureOrigin: transport-agnostic failures.
//! - QuoteLookupService: implementation of the `StockQuoteQuery` port.

pub mod error;
pub mod ports;
pub mod price;
pub mod price_targets;
pub mod quote;
pub mod quote_service;
pub mod symbol;

pub use self::error::{Error, ErrorCode, FailureOrigin, UnknownErrorCode};
pub use self::price::round_to_cents;
pub use self::price_targets::{Direction, PriceTarget, PriceTargets, TargetLadder};
pub use self::quote::Quote;
pub use self::quote_service::QuoteLookupService;
pub use self::symbol::{MAX_SYMBOL_LEN, Symbol, SymbolValidationError};
