//! Application router and middleware stack.
//!
//! [`build_app_router`] is shared by the binary and the integration tests so
//! both run behind identical middleware.

use std::time::Duration;

use axum::http::header::{InvalidHeaderValue, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

const REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Preflight responses may be cached this long by the browser.
const CORS_MAX_AGE: Duration = Duration::from_secs(60 * 60);

/// The `/health` route at the root plus the `/api` tree, wrapped in the
/// middleware stack.
///
/// Layers run outermost first:
///
/// ```text
/// CORS -> set x-request-id -> trace -> echo x-request-id -> timeout -> catch panic -> handler
/// ```
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let timeout = Duration::from_secs(config.request_timeout_secs);
    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // `.layer` wraps everything added before it, so the innermost goes first.
    Router::new()
        .merge(routes::health::router())
        .nest("/api", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout))
        .layer(PropagateRequestIdLayer::new(REQUEST_ID))
        .layer(trace)
        .layer(SetRequestIdLayer::new(REQUEST_ID, MakeRequestUuid))
        .layer(build_cors_layer(config))
        .with_state(state)
}

/// Parse configured origins into header values.
pub fn parse_cors_origins(origins: &[String]) -> Result<Vec<HeaderValue>, InvalidHeaderValue> {
    origins.iter().map(|origin| HeaderValue::from_str(origin)).collect()
}

/// CORS for the configured origins: the verbs the API serves and JSON bodies.
///
/// Panics on an origin that is not a valid header value; this runs once at
/// startup.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins = parse_cors_origins(&config.cors_origins)
        .unwrap_or_else(|e| panic!("Invalid CORS origin in {:?}: {e}", config.cors_origins));

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .max_age(CORS_MAX_AGE)
}
