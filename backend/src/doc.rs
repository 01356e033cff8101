//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the stock and health endpoints together with the
//! envelope schemas. The document backs Swagger UI in debug builds and is
//! exported by the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::domain::{ErrorCode, Quote};
use crate::inbound::http::envelope::{ErrorBody, StockResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Stock price calculator API",
        description = "Quote lookups proxied to Alpha Vantage, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::stock::get_stock,
        crate::inbound::http::stock::missing_symbol,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(StockResponse, ErrorBody, Quote, ErrorCode)),
    tags(
        (name = "stock", description = "Quote lookups"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
