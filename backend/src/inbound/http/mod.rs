//! HTTP inbound adapter exposing REST endpoints.

pub mod cache_control;
pub mod envelope;
pub mod error;
pub mod health;
pub mod state;
pub mod stock;

pub use error::ApiResult;
