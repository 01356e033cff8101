//! Shared helpers for backend integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`, so the
//! in-process HTTP servers they talk to live here: a canned upstream standing
//! in for the quote provider, and the stock API itself wired to any
//! `QuoteSource`.

#![allow(dead_code, reason = "each test crate uses a different subset")]

use std::net::TcpListener;
use std::sync::{Arc, Mutex};

use actix_web::dev::ServerHandle;
use actix_web::http::{StatusCode, header};
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use stock_calculator::Trace;
use stock_calculator::domain::QuoteLookupService;
use stock_calculator::domain::ports::QuoteSource;
use stock_calculator::inbound::http::health::{HealthState, live, ready};
use stock_calculator::inbound::http::state::HttpState;
use stock_calculator::inbound::http::stock;

/// Page served at `/` by [`spawn_app`].
pub const FRONT_PAGE: &str =
    "<!doctype html><html><head><title>Stock Price Calculator</title></head></html>";

/// A request observed by a stub server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub query: String,
    pub user_agent: Option<String>,
}

/// Canned reply for one path.
#[derive(Debug, Clone)]
pub struct StubReply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl StubReply {
    pub fn json(status: u16, body: &serde_json::Value) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: body.to_string(),
        }
    }

    pub fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "text/html",
            body: body.to_owned(),
        }
    }
}

struct StubState {
    routes: Vec<(String, StubReply)>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Running stub server.
pub struct StubServer {
    pub base_url: String,
    handle: ServerHandle,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubServer {
    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("requests lock").clone()
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

async fn stub_reply(req: HttpRequest, state: web::Data<StubState>) -> HttpResponse {
    state
        .requests
        .lock()
        .expect("requests lock")
        .push(RecordedRequest {
            path: req.path().to_owned(),
            query: req.query_string().to_owned(),
            user_agent: req
                .headers()
                .get(header::USER_AGENT)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned),
        });

    match state.routes.iter().find(|(path, _)| path == req.path()) {
        Some((_, reply)) => HttpResponse::build(
            StatusCode::from_u16(reply.status).expect("valid stub status"),
        )
        .content_type(reply.content_type)
        .body(reply.body.clone()),
        None => HttpResponse::NotFound().finish(),
    }
}

fn bind_local() -> TcpListener {
    TcpListener::bind("127.0.0.1:0").expect("bind local listener")
}

/// Start a server answering each path in `routes` with its canned reply and
/// 404 otherwise. Must be called inside an actix runtime.
pub fn spawn_stub(routes: Vec<(&str, StubReply)>) -> StubServer {
    let listener = bind_local();
    let addr = listener.local_addr().expect("stub address");
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = web::Data::new(StubState {
        routes: routes
            .into_iter()
            .map(|(path, reply)| (path.to_owned(), reply))
            .collect(),
        requests: Arc::clone(&requests),
    });

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .default_service(web::to(stub_reply))
    })
    .disable_signals()
    .workers(1)
    .listen(listener)
    .expect("stub listen")
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);

    StubServer {
        base_url: format!("http://{addr}/"),
        handle,
        requests,
    }
}

/// Start the stock API backed by `source`, plus a static front page at `/`.
pub fn spawn_app(source: Arc<dyn QuoteSource>) -> StubServer {
    let listener = bind_local();
    let addr = listener.local_addr().expect("app address");
    let http_state = web::Data::new(HttpState::new(Arc::new(QuoteLookupService::new(source))));
    let health_state = web::Data::new(HealthState::new());
    health_state.mark_ready();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(http_state.clone())
            .app_data(health_state.clone())
            .wrap(Trace)
            .service(web::scope("/api").configure(stock::configure))
            .service(ready)
            .service(live)
            .route(
                "/",
                web::get().to(|| async {
                    HttpResponse::Ok().content_type("text/html").body(FRONT_PAGE)
                }),
            )
    })
    .disable_signals()
    .workers(1)
    .listen(listener)
    .expect("app listen")
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);

    StubServer {
        base_url: format!("http://{addr}/"),
        handle,
        requests: Arc::new(Mutex::new(Vec::new())),
    }
}

/// URL of a local port with nothing listening on it.
pub fn closed_port_url() -> String {
    let listener = bind_local();
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{addr}/")
}
