//! Tests for the server bootstrap, covering readiness and liveness
//! signalling.

use std::net::SocketAddr;
use std::sync::Arc;

use super::server::{ServerConfig, create_server, drain_on};
use actix_web::web;
use rstest::{fixture, rstest};
use stock_calculator::domain::ports::FixtureQuoteSource;
use stock_calculator::inbound::http::health::HealthState;

#[fixture]
fn health_state() -> web::Data<HealthState> {
    web::Data::new(HealthState::new())
}

#[fixture]
fn config() -> ServerConfig {
    let addr: SocketAddr = "127.0.0.1:0".parse().expect("valid socket address");
    ServerConfig::new(addr, Arc::new(FixtureQuoteSource))
}

#[rstest]
#[actix_rt::test]
async fn create_server_marks_ready(health_state: web::Data<HealthState>, config: ServerConfig) {
    assert!(!health_state.is_ready(), "state should start unready");
    let _server = create_server(health_state.clone(), config).expect("server should bind");
    assert!(
        health_state.is_ready(),
        "server creation should mark readiness"
    );
}

#[rstest]
#[actix_rt::test]
async fn create_server_rejects_occupied_port(health_state: web::Data<HealthState>) {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe listener");
    let addr = listener.local_addr().expect("local addr");
    let config = ServerConfig::new(addr, Arc::new(FixtureQuoteSource));

    assert!(create_server(health_state.clone(), config).is_err());
    assert!(!health_state.is_ready());
}

#[rstest]
#[actix_rt::test]
async fn drain_fails_liveness_once_signalled(health_state: web::Data<HealthState>) {
    assert!(health_state.is_alive(), "state should start live");
    drain_on(health_state.clone(), std::future::ready(())).await;
    assert!(!health_state.is_alive(), "drain should fail liveness");
}
