//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into the stock envelope with a consistent
//! status code.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use super::envelope::StockResponse;
use crate::domain::{Error, FailureOrigin};
use crate::middleware::TRACE_ID_HEADER;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(origin: FailureOrigin) -> StatusCode {
    match origin {
        FailureOrigin::Request => StatusCode::BAD_REQUEST,
        FailureOrigin::Lookup => StatusCode::NOT_FOUND,
        FailureOrigin::Upstream => StatusCode::BAD_GATEWAY,
        FailureOrigin::Service => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.origin())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(StockResponse::failure(self))
    }
}

#[cfg(test)]
mod tests;
