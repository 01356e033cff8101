//! Stock quote handlers.
//!
//! ```text
//! GET /api/stock/{symbol}
//! GET /api/stock          -> MISSING_SYMBOL
//! ```

use actix_web::{HttpResponse, get, web};

use super::ApiResult;
use super::cache_control::public_max_age_header;
use super::envelope::StockResponse;
use super::state::HttpState;

/// Paths answering requests that name no symbol.
pub const MISSING_SYMBOL_PATHS: [&str; 2] = ["/stock", "/stock/"];

async fn respond(state: &HttpState, raw_symbol: Option<&str>) -> ApiResult<HttpResponse> {
    let quote = state.quotes.lookup(raw_symbol).await?;
    Ok(HttpResponse::Ok()
        .insert_header(public_max_age_header(state.cache_max_age))
        .json(StockResponse::ok(quote)))
}

/// Fetch the latest quote for a symbol.
///
/// The symbol must be 1-5 letters; it is uppercased before the provider is
/// called. Successful responses may be cached by shared caches.
#[utoipa::path(
    get,
    path = "/api/stock/{symbol}",
    params(("symbol" = String, Path, description = "Ticker, 1-5 letters", example = "AAPL")),
    responses(
        (status = 200, description = "Quote found", body = StockResponse,
            headers(("Cache-Control" = String, description = "public, max-age=<seconds>"))),
        (status = 400, description = "Missing or invalid symbol", body = StockResponse),
        (status = 404, description = "Symbol not found", body = StockResponse),
        (status = 500, description = "Provider not configured or failed unexpectedly",
            body = StockResponse),
        (status = 502, description = "Provider failed or unreachable", body = StockResponse)
    ),
    tags = ["stock"],
    operation_id = "getStock"
)]
#[get("/stock/{symbol}")]
pub async fn get_stock(
    state: web::Data<HttpState>,
    symbol: web::Path<String>,
) -> ApiResult<HttpResponse> {
    respond(&state, Some(symbol.as_str())).await
}

/// Reject lookups that name no symbol.
#[utoipa::path(
    get,
    path = "/api/stock",
    responses(
        (status = 400, description = "Symbol is required", body = StockResponse)
    ),
    tags = ["stock"],
    operation_id = "getStockWithoutSymbol"
)]
pub async fn missing_symbol(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    respond(&state, None).await
}

/// Register the stock handlers on a scope mounted at `/api`.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use stock_calculator::inbound::http::stock;
///
/// let app = App::new().service(web::scope("/api").configure(stock::configure));
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_stock)
        .service(web::resource(MISSING_SYMBOL_PATHS).route(web::get().to(missing_symbol)));
}

#[cfg(test)]
mod tests {
    //! Handler behaviour against mocked and fixture providers.

    use std::sync::Arc;

    use super::*;
    use crate::domain::QuoteLookupService;
    use crate::domain::ports::{FixtureQuoteSource, MockQuoteSource, QuoteSource, QuoteSourceError};
    use actix_web::http::{StatusCode, header};
    use actix_web::{App, test};
    use rstest::rstest;
    use serde_json::{Value, json};

    fn state_with(source: Arc<dyn QuoteSource>) -> web::Data<HttpState> {
        web::Data::new(HttpState::new(Arc::new(QuoteLookupService::new(source))))
    }

    fn untouched_source() -> Arc<dyn QuoteSource> {
        let mut source = MockQuoteSource::new();
        source.expect_fetch_quote().times(0);
        Arc::new(source)
    }

    fn failing_source(err: QuoteSourceError) -> Arc<dyn QuoteSource> {
        let mut source = MockQuoteSource::new();
        source
            .expect_fetch_quote()
            .times(1)
            .returning(move |_| Err(err.clone()));
        Arc::new(source)
    }

    async fn get(state: web::Data<HttpState>, uri: &str) -> (StatusCode, Option<String>, Value) {
        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(web::scope("/api").configure(configure)),
        )
        .await;
        let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let status = res.status();
        let cache = res
            .headers()
            .get(header::CACHE_CONTROL)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = test::read_body(res).await;
        let value = serde_json::from_slice(&body).expect("json body");
        (status, cache, value)
    }

    #[actix_web::test]
    async fn returns_rounded_quote_with_cache_header() {
        let (status, cache, body) =
            get(state_with(Arc::new(FixtureQuoteSource)), "/api/stock/aapl").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(cache.as_deref(), Some("public, max-age=300"));
        assert_eq!(
            body,
            json!({
                "success": true,
                "data": {
                    "symbol": "AAPL",
                    "currentPrice": 150.01,
                    "previousClose": 148.0,
                    "lastUpdated": "2024-05-17"
                }
            })
        );
    }

    #[actix_web::test]
    async fn cache_lifetime_is_configurable() {
        let state = HttpState::new(Arc::new(QuoteLookupService::new(Arc::new(
            FixtureQuoteSource,
        ))))
        .with_cache_max_age(60);
        let (_, cache, _) = get(web::Data::new(state), "/api/stock/MSFT").await;
        assert_eq!(cache.as_deref(), Some("public, max-age=60"));
    }

    #[rstest]
    #[case("/api/stock")]
    #[case("/api/stock/")]
    #[actix_web::test]
    async fn absent_symbol_is_rejected(#[case] uri: &str) {
        let (status, cache, body) = get(state_with(untouched_source()), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(cache.is_none());
        assert_eq!(
            body,
            json!({
                "success": false,
                "error": {"code": "MISSING_SYMBOL", "message": "Stock symbol is required"}
            })
        );
    }

    #[rstest]
    #[case("/api/stock/TOOLONG")]
    #[case("/api/stock/BRK.B")]
    #[case("/api/stock/123")]
    #[case("/api/stock/A%20B")]
    #[case("/api/stock/%C3%85")]
    #[actix_web::test]
    async fn malformed_symbol_never_reaches_provider(#[case] uri: &str) {
        let (status, _, body) = get(state_with(untouched_source()), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"]["code"], json!("INVALID_SYMBOL"));
        assert_eq!(
            body["error"]["message"],
            json!("Please enter a valid stock symbol (1-5 letters)")
        );
    }

    #[rstest]
    #[case::not_configured(
        QuoteSourceError::NotConfigured,
        StatusCode::INTERNAL_SERVER_ERROR,
        "API_UNAVAILABLE"
    )]
    #[case::throttled(
        QuoteSourceError::UpstreamStatus { status: 429 },
        StatusCode::BAD_GATEWAY,
        "API_UNAVAILABLE"
    )]
    #[case::not_found(
        QuoteSourceError::NotFound { symbol: "ZZZZ".to_owned() },
        StatusCode::NOT_FOUND,
        "SYMBOL_NOT_FOUND"
    )]
    #[case::transport(
        QuoteSourceError::transport("connection refused"),
        StatusCode::BAD_GATEWAY,
        "NETWORK_ERROR"
    )]
    #[case::decode(
        QuoteSourceError::decode("eof"),
        StatusCode::INTERNAL_SERVER_ERROR,
        "API_UNAVAILABLE"
    )]
    #[actix_web::test]
    async fn provider_failures_use_error_envelope(
        #[case] failure: QuoteSourceError,
        #[case] expected_status: StatusCode,
        #[case] expected_code: &str,
    ) {
        let state = state_with(failing_source(failure));
        let (status, cache, body) = get(state, "/api/stock/ZZZZ").await;
        assert_eq!(status, expected_status);
        assert!(cache.is_none());
        assert_eq!(body["success"], json!(false));
        assert!(body.get("data").is_none());
        assert_eq!(body["error"]["code"], json!(expected_code));
    }
}
