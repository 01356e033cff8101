//! Tests for HTTP error mapping.

use super::*;
use crate::domain::ErrorCode;
use crate::inbound::http::envelope::ErrorBody;
use actix_web::body::to_bytes;
use rstest::{fixture, rstest};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn traced_not_found() -> Error {
    Error::symbol_not_found().with_trace_id(TRACE_ID)
}

#[rstest]
#[case::missing(Error::missing_symbol(), StatusCode::BAD_REQUEST)]
#[case::invalid(Error::invalid_symbol(), StatusCode::BAD_REQUEST)]
#[case::not_found(Error::symbol_not_found(), StatusCode::NOT_FOUND)]
#[case::network(Error::network_error(), StatusCode::BAD_GATEWAY)]
#[case::upstream(Error::upstream_unavailable(), StatusCode::BAD_GATEWAY)]
#[case::service(Error::service_unavailable(), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_follows_origin(#[case] err: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&err), status);
}

#[rstest]
fn api_unavailable_status_depends_on_origin() {
    let upstream = Error::upstream_unavailable();
    let local = Error::service_unavailable();
    assert_eq!(upstream.code(), ErrorCode::ApiUnavailable);
    assert_eq!(local.code(), ErrorCode::ApiUnavailable);
    assert_ne!(
        ResponseError::status_code(&upstream),
        ResponseError::status_code(&local)
    );
}

async fn decode_response(error: &Error) -> (HttpResponse<()>, StockResponse) {
    let response = ResponseError::error_response(error);
    let (response, body) = response.into_parts();
    let bytes = to_bytes(body).await.expect("reading response body succeeds");
    let envelope = serde_json::from_slice(&bytes).expect("envelope deserialisation succeeds");
    (response, envelope)
}

#[rstest]
#[actix_web::test]
async fn error_response_carries_envelope_and_trace_id(traced_not_found: Error) {
    let (response, envelope) = decode_response(&traced_not_found).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .expect("trace id header")
        .to_str()
        .expect("header is ascii");
    assert_eq!(header, TRACE_ID);
    assert!(!envelope.success);
    assert!(envelope.data.is_none());
    assert_eq!(
        envelope.error,
        Some(ErrorBody {
            code: "SYMBOL_NOT_FOUND".to_owned(),
            message: ErrorCode::SymbolNotFound.message().to_owned(),
        })
    );
}

#[rstest]
#[actix_web::test]
async fn untraced_errors_omit_header() {
    let (response, envelope) = decode_response(&Error::invalid_symbol()).await;
    assert!(response.headers().get(TRACE_ID_HEADER).is_none());
    assert_eq!(
        envelope.error.and_then(|e| e.error_code()),
        Some(ErrorCode::InvalidSymbol)
    );
}
