//! # REST API
//!
//! HTTP surface of the quote service, built on axum.
//!
//! # Endpoints
//!
//! ## Quotes
//! - `POST /api/quote` - Validate, price and persist a selection as a lead
//! - `POST /api/quote/preview` - Validate and price without persisting
//!
//! ## Catalog
//! - `GET /api/services` - List sellable services
//!
//! ## Health
//! - `GET /health` - Liveness
//! - `GET /ready` - Readiness, including the lead store
//!
//! # Usage
//!
//! ```ignore
//! use quote_leads::api::rest::{create_router, AppState};
//! use std::sync::Arc;
//!
//! let state = Arc::new(AppState::new(Arc::new(quote_service)));
//! let router = create_router(state, 1024 * 1024);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{
    ApiError, ApiResponse, AppState, BreakdownResponse, CatalogEntryResponse, ErrorResponse,
    LeadResponse, LineItemResponse, QuoteRequest, ReadinessResponse, SelectionEntry,
};
pub use routes::{create_router, shutdown_signal};
