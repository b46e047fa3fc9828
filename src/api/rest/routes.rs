//! # REST Routes
//!
//! Router assembly and HTTP middleware.

use crate::api::rest::handlers::{
    health, list_services, preview_quote, ready, submit_quote, AppState,
};
use axum::http::Request;
use axum::routing::{get, post};
use axum::Router;
use std::io;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing::Level;

/// Builds the service router.
///
/// Request bodies larger than `body_limit` bytes are refused before any
/// handler runs.
pub fn create_router(state: Arc<AppState>, body_limit: usize) -> Router {
    let trace = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<_>| {
            let req_id = req
                .headers()
                .get("x-request-id")
                .and_then(|v| v.to_str().ok())
                .unwrap_or("-");
            tracing::info_span!(
                "http_request",
                method = %req.method(),
                uri = %req.uri(),
                req_id
            )
        })
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        );
    let req_id = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id());

    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/api/services", get(list_services))
        .route("/api/quote", post(submit_quote))
        .route("/api/quote/preview", post(preview_quote))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(trace)
        .layer(req_id)
        .layer(RequestBodyLimitLayer::new(body_limit))
}

/// Resolves on Ctrl-C. Passed to `axum::serve(..).with_graceful_shutdown`.
pub async fn shutdown_signal() {
    wait_for_shutdown(tokio::signal::ctrl_c()).await;
}

/// Waits for `signal`. A listener that fails to install never resolves, so
/// the server keeps running instead of stopping right after start.
async fn wait_for_shutdown<F>(signal: F)
where
    F: Future<Output = io::Result<()>>,
{
    match signal.await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(e) => {
            tracing::error!(error = %e, "failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
