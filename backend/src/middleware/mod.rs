//! Request middleware.
//!
//! Purpose: request lifecycle concerns shared by every endpoint: trace
//! identifiers and per-request log lines.

pub mod trace;

pub use trace::{TRACE_ID_HEADER, Trace, TraceId};
