//! Alpha Vantage adapter behaviour against an in-process stub provider.

mod support;

use rstest::rstest;
use serde_json::json;
use stock_calculator::config::{ApiKey, UpstreamSettings};
use stock_calculator::domain::Symbol;
use stock_calculator::domain::ports::{QuoteSource, QuoteSourceError};
use stock_calculator::USER_AGENT;
use stock_calculator::outbound::alpha_vantage::AlphaVantageQuoteSource;
use support::{StubReply, closed_port_url, spawn_stub};
use url::Url;

fn source(base_url: &str, key: Option<&str>) -> AlphaVantageQuoteSource {
    AlphaVantageQuoteSource::new(UpstreamSettings {
        api_key: key.and_then(ApiKey::new),
        base_url: Url::parse(base_url).expect("valid base url"),
    })
    .expect("adapter builds")
}

fn symbol(raw: &str) -> Symbol {
    Symbol::parse(raw).expect("valid symbol")
}

#[actix_web::test]
async fn decodes_quote_and_sends_expected_request() {
    let stub = spawn_stub(vec![(
        "/query",
        StubReply::json(
            200,
            &json!({
                "Global Quote": {
                    "01. symbol": "AAPL",
                    "05. price": "150.0050",
                    "07. latest trading day": "2024-05-17",
                    "08. previous close": "148.0000"
                }
            }),
        ),
    )]);

    let quote = source(&stub.base_url, Some("test-key"))
        .fetch_quote(&symbol("aapl"))
        .await
        .expect("quote");
    assert_eq!(quote.symbol, "AAPL");
    assert_eq!(quote.price, 150.005);
    assert_eq!(quote.previous_close, 148.0);
    assert_eq!(quote.latest_trading_day, "2024-05-17");

    let requests = stub.requests();
    assert_eq!(requests.len(), 1, "exactly one upstream call");
    assert_eq!(requests[0].path, "/query");
    assert_eq!(
        requests[0].query,
        "function=GLOBAL_QUOTE&symbol=AAPL&apikey=test-key"
    );
    assert_eq!(requests[0].user_agent.as_deref(), Some(USER_AGENT));
    stub.stop().await;
}

#[rstest]
#[case::throttled(StubReply::text(429, "slow down"), QuoteSourceError::UpstreamStatus { status: 429 })]
#[case::server_error(StubReply::text(503, "maintenance"), QuoteSourceError::UpstreamStatus { status: 503 })]
#[case::empty_quote(
    StubReply::json(200, &json!({"Global Quote": {}})),
    QuoteSourceError::NotFound { symbol: "ZZZZ".to_owned() }
)]
#[case::throttle_note(
    StubReply::json(200, &json!({"Note": "Our standard API call frequency is 5 calls per minute."})),
    QuoteSourceError::NotFound { symbol: "ZZZZ".to_owned() }
)]
#[actix_web::test]
async fn classifies_provider_answers(#[case] reply: StubReply, #[case] expected: QuoteSourceError) {
    let stub = spawn_stub(vec![("/query", reply)]);
    let err = source(&stub.base_url, Some("test-key"))
        .fetch_quote(&symbol("ZZZZ"))
        .await
        .expect_err("lookup fails");
    assert_eq!(err, expected);
    assert_eq!(stub.requests().len(), 1, "no retries");
    stub.stop().await;
}

#[actix_web::test]
async fn html_body_is_a_decode_error() {
    let stub = spawn_stub(vec![("/query", StubReply::text(200, "<html>oops</html>"))]);
    let err = source(&stub.base_url, Some("test-key"))
        .fetch_quote(&symbol("IBM"))
        .await
        .expect_err("lookup fails");
    assert!(matches!(err, QuoteSourceError::Decode { .. }));
    stub.stop().await;
}

#[actix_web::test]
async fn unreachable_provider_is_a_transport_error_without_the_key() {
    let err = source(&closed_port_url(), Some("very-secret-key"))
        .fetch_quote(&symbol("IBM"))
        .await
        .expect_err("lookup fails");
    let QuoteSourceError::Transport { message } = &err else {
        panic!("expected transport error, got {err:?}");
    };
    assert!(!message.contains("very-secret-key"));
}

#[actix_web::test]
async fn missing_key_skips_the_provider() {
    let stub = spawn_stub(vec![]);
    let err = source(&stub.base_url, None)
        .fetch_quote(&symbol("IBM"))
        .await
        .expect_err("lookup fails");
    assert_eq!(err, QuoteSourceError::NotConfigured);
    assert!(stub.requests().is_empty());
    stub.stop().await;
}
