//! Backend entry-point: reads configuration, wires the Alpha Vantage adapter
//! into the quote endpoint, and serves health probes and OpenAPI docs.

mod server;

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultEnv;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server, drain_on, shutdown_signal};
use stock_calculator::config::settings_from_env;
use stock_calculator::inbound::http::health::HealthState;
use stock_calculator::outbound::alpha_vantage::AlphaVantageQuoteSource;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = settings_from_env(&DefaultEnv::new()).map_err(std::io::Error::other)?;
    let source =
        AlphaVantageQuoteSource::new(settings.upstream.clone()).map_err(std::io::Error::other)?;
    let config = ServerConfig::from_settings(&settings, Arc::new(source));

    let health_state = web::Data::new(HealthState::new());
    actix_web::rt::spawn(drain_on(health_state.clone(), shutdown_signal()));
    let server = create_server(health_state, config)?;
    server.await
}

#[cfg(test)]
mod tests;
