//! Shared fixtures for router-level tests.

#![allow(dead_code, clippy::unwrap_used)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use quote_leads::api::rest::{create_router, AppState};
use quote_leads::application::services::QuoteService;
use quote_leads::domain::entities::{Catalog, Lead};
use quote_leads::infrastructure::persistence::{
    InMemoryLeadRepository, LeadRepository, RepositoryError, RepositoryResult,
};
use serde_json::Value;
use std::sync::Arc;

/// Body limit used by test routers.
pub const TEST_BODY_LIMIT: usize = 16 * 1024;

/// Lead store whose every call fails as if the database were down.
#[derive(Debug, Default)]
pub struct UnavailableLeadRepository;

#[async_trait]
impl LeadRepository for UnavailableLeadRepository {
    async fn insert(&self, _lead: &Lead) -> RepositoryResult<()> {
        Err(RepositoryError::connection("pool timed out while waiting for an open connection"))
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Err(RepositoryError::connection("pool timed out while waiting for an open connection"))
    }
}

/// Router over the standard catalog and the given store.
pub fn router_with(repository: Arc<dyn LeadRepository>) -> Router {
    let service = QuoteService::new(Arc::new(Catalog::standard()), repository);
    create_router(Arc::new(AppState::new(Arc::new(service))), TEST_BODY_LIMIT)
}

/// Router plus a handle on its in-memory store.
pub fn memory_router() -> (Router, InMemoryLeadRepository) {
    let repo = InMemoryLeadRepository::new();
    (router_with(Arc::new(repo.clone())), repo)
}

/// JSON POST request.
pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// POST request with a raw body.
pub fn post_raw(uri: &str, content_type: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body))
        .unwrap()
}

/// GET request.
pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Reads a response body as JSON.
pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
