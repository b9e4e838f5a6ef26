//! api-server — HTTP frontend for the param-blog workspace.
//!
//! Exposes a single route: `GET /{param}` appends a random 10-character
//! alphanumeric suffix to the path parameter, stores the concatenation
//! in memory, and returns it in a small JSON envelope.
//!
//! Run:
//! ```bash
//! # pretty logs (default); PORT optional
//! cargo run -p api-server
//!
//! # JSON logs on a custom port
//! PORT=9000 LOG_FORMAT=json cargo run -p api-server
//! ```
//!
//! Configuration: See `config.rs` for all environment variables.

mod config;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use domain::adapters::memory_storage::InMemoryStorage;
use domain::service::ParamService;
use domain::suffix::RandomSuffixGenerator;
use domain::StoredValue;
use serde::Serialize;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Constant title field of every response envelope.
const RESPONSE_TITLE: &str = "blog title";

#[derive(Clone)]
struct AppState {
    service: Arc<ParamService<InMemoryStorage, RandomSuffixGenerator>>,
}

impl AppState {
    fn new() -> Self {
        Self {
            service: Arc::new(ParamService::new(
                InMemoryStorage::new(),
                RandomSuffixGenerator::default(),
            )),
        }
    }
}

#[tokio::main]
async fn main() {
    // Load and validate config first (fail fast on misconfiguration)
    let cfg = match config::Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&cfg);

    let state = AppState::new();

    // Request ID header name
    let x_request_id = axum::http::HeaderName::from_static("x-request-id");

    let app = Router::new()
        .route("/:param", get(blog))
        .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("-");
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id,
                )
            }),
        )
        .layer(SetRequestIdLayer::new(x_request_id, MakeRequestUuid))
        .with_state(state);

    let addr: SocketAddr = ([0, 0, 0, 0], cfg.port).into();
    info!(%addr, "api-server listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("bind port");
    axum::serve(listener, app).await.expect("server error");
}

fn init_tracing(cfg: &config::Config) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);
    match cfg.log_format {
        config::LogFormat::Json => {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_timer(fmt::time::SystemTime)
                        .with_writer(std::io::stdout),
                )
                .init();
        }
        config::LogFormat::Pretty => {
            registry
                .with(
                    fmt::layer()
                        .pretty()
                        .with_target(true)
                        .with_writer(std::io::stdout),
                )
                .init();
        }
    }
}

/// The two-field response envelope returned to the caller.
#[derive(Serialize)]
struct ResponseModel {
    title: &'static str,
    #[serde(rename = "responseParam")]
    response_param: StoredValue,
}

async fn blog(State(state): State<AppState>, Path(param): Path<String>) -> impl IntoResponse {
    match state.service.handle(&param) {
        Ok(stored) => {
            info!(value = %stored, "handle ok");
            (
                StatusCode::OK,
                Json(ResponseModel {
                    title: RESPONSE_TITLE,
                    response_param: stored,
                }),
            )
                .into_response()
        }
        Err(e) => {
            error!(err = ?e, "handle error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(http_common::json_err("error")),
            )
                .into_response()
        }
    }
}
