use axum::{
    Router,
    body::Body,
    http::{HeaderName, HeaderValue, Request, header},
    routing::get,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::youtube::YouTubeClient;

pub mod handlers;
pub mod models;

/// Cross-origin policy attached to every response, errors and preflights included.
pub const CORS_HEADERS: [(HeaderName, &str); 4] = [
    (header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true"),
    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (
        header::ACCESS_CONTROL_ALLOW_METHODS,
        "GET,OPTIONS,PATCH,DELETE,POST,PUT",
    ),
    (
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        "X-CSRF-Token, X-Requested-With, Accept, Accept-Version, Content-Length, Content-MD5, Content-Type, Date, X-Api-Version",
    ),
];

fn cors_header(name: HeaderName, value: &'static str) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(name, HeaderValue::from_static(value))
}

pub fn create_router(client: Arc<YouTubeClient>) -> Router {
    let [credentials, origin, methods, headers] = CORS_HEADERS;

    // tower_http's CorsLayer refuses a wildcard origin combined with credentials,
    // so the fixed policy is written out as plain response headers.
    let cors = ServiceBuilder::new()
        .layer(cors_header(credentials.0, credentials.1))
        .layer(cors_header(origin.0, origin.1))
        .layer(cors_header(methods.0, methods.1))
        .layer(cors_header(headers.0, headers.1));

    Router::new()
        .route(
            "/api/search",
            get(handlers::search_handler).options(handlers::preflight_handler),
        )
        .with_state(client)
        .layer(cors)
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
}

/// Span for one HTTP request. Only the path is recorded: the query string carries
/// the caller's `apiKey`.
fn request_span(request: &Request<Body>) -> tracing::Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path()
    )
}
