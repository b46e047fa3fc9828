//! # REST Handlers
//!
//! Request handlers and wire DTOs for the quote API.
//!
//! Every JSON body uses camelCase keys and a `success` flag. Money leaves
//! the service as JSON numbers.

use crate::application::error::ApplicationError;
use crate::application::services::QuoteService;
use crate::domain::entities::{CatalogEntry, Lead, QuoteBreakdown, QuoteLineItem};
use crate::domain::errors::ValidationError;
use crate::domain::value_objects::BillingUnit;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Body returned by the liveness probe.
pub const HEALTH_MESSAGE: &str = "API is running";

// ============================================================================
// Application State
// ============================================================================

/// Shared state for REST handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Quote submission service.
    pub quote_service: Arc<QuoteService>,
}

impl AppState {
    /// Creates handler state around a quote service.
    #[must_use]
    pub fn new(quote_service: Arc<QuoteService>) -> Self {
        Self { quote_service }
    }
}

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for quote submission and preview.
///
/// Handlers validate the raw JSON so that shape errors map onto the
/// validation taxonomy; this type documents the accepted contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(schemars::JsonSchema))]
pub struct QuoteRequest {
    /// Services and quantities, in display order.
    pub selection: Vec<SelectionEntry>,
    /// Optional contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// One requested service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(schemars::JsonSchema))]
pub struct SelectionEntry {
    /// Catalog identifier.
    pub id: String,
    /// Number of units, at least 1.
    pub quantity: u32,
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Success envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(schemars::JsonSchema))]
pub struct ApiResponse<T> {
    /// Always true.
    pub success: bool,
    /// Payload.
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Wraps a payload in a success envelope.
    #[must_use]
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(schemars::JsonSchema))]
pub struct ErrorResponse {
    /// Always false.
    pub success: bool,
    /// Human readable message.
    pub error: String,
    /// Machine-readable error code.
    pub code: String,
}

impl ErrorResponse {
    /// Builds the caller-facing body for an application error.
    #[must_use]
    pub fn from_error(error: &ApplicationError) -> Self {
        Self {
            success: false,
            error: error.public_message(),
            code: error.kind().code().to_string(),
        }
    }
}

/// One priced line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct LineItemResponse {
    /// Catalog identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: f64,
    /// Quantity.
    pub quantity: u32,
    /// `price * quantity`.
    pub line_total: f64,
}

impl From<&QuoteLineItem> for LineItemResponse {
    fn from(line: &QuoteLineItem) -> Self {
        Self {
            id: line.service_id().to_string(),
            name: line.name().to_string(),
            price: line.unit_price().to_f64(),
            quantity: line.quantity(),
            line_total: line.line_total().to_f64(),
        }
    }
}

/// Priced quote without persistence metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct BreakdownResponse {
    /// Line items in selection order.
    pub services: Vec<LineItemResponse>,
    /// Sum of line totals.
    pub subtotal: f64,
    /// Tax on the subtotal.
    pub tax_amount: f64,
    /// `subtotal + taxAmount`.
    pub grand_total: f64,
}

impl From<&QuoteBreakdown> for BreakdownResponse {
    fn from(breakdown: &QuoteBreakdown) -> Self {
        Self {
            services: breakdown.line_items().iter().map(Into::into).collect(),
            subtotal: breakdown.subtotal().to_f64(),
            tax_amount: breakdown.tax_amount().to_f64(),
            grand_total: breakdown.grand_total().to_f64(),
        }
    }
}

/// Persisted lead as returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct LeadResponse {
    /// Server-assigned lead identifier.
    pub lead_id: String,
    /// Creation time, RFC 3339.
    pub created_at: String,
    /// Priced quote.
    #[serde(flatten)]
    pub breakdown: BreakdownResponse,
}

impl From<&Lead> for LeadResponse {
    fn from(lead: &Lead) -> Self {
        Self {
            lead_id: lead.id().to_string(),
            created_at: lead.created_at().to_iso8601(),
            breakdown: lead.breakdown().into(),
        }
    }
}

/// One catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntryResponse {
    /// Catalog identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: f64,
    /// `one-time` or `monthly`.
    pub billing_unit: String,
    /// Human readable billing label.
    pub billing_label: String,
}

impl From<&CatalogEntry> for CatalogEntryResponse {
    fn from(entry: &CatalogEntry) -> Self {
        let unit: BillingUnit = entry.billing_unit();
        Self {
            id: entry.id().to_string(),
            name: entry.name().to_string(),
            price: entry.unit_price().to_f64(),
            billing_unit: unit.code().to_string(),
            billing_label: unit.to_string(),
        }
    }
}

/// Readiness probe body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ReadinessResponse {
    /// `ready` or `degraded`.
    pub status: String,
    /// Whether the lead store answered.
    pub storage_healthy: bool,
}

// ============================================================================
// Errors
// ============================================================================

/// Error code for a body refused by the size limit.
pub const PAYLOAD_TOO_LARGE_CODE: &str = "PAYLOAD_TOO_LARGE";

const PAYLOAD_TOO_LARGE_MESSAGE: &str = "Request body too large";

/// Handler error mapped onto an HTTP response.
#[derive(Debug)]
pub enum ApiError {
    /// Failure raised by the quote service.
    Application(ApplicationError),
    /// Body exceeded the configured limit while it was being read.
    PayloadTooLarge,
}

impl ApiError {
    /// Returns the HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Application(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            Self::Application(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    fn body(&self) -> ErrorResponse {
        match self {
            Self::Application(err) => ErrorResponse::from_error(err),
            Self::PayloadTooLarge => ErrorResponse {
                success: false,
                error: PAYLOAD_TOO_LARGE_MESSAGE.to_string(),
                code: PAYLOAD_TOO_LARGE_CODE.to_string(),
            },
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        Self::Application(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        // Streamed bodies without content-length hit the limit here.
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            tracing::info!("request body over limit");
            return Self::PayloadTooLarge;
        }
        tracing::debug!(reason = %rejection.body_text(), "unreadable request body");
        Self::Application(ValidationError::MalformedPayload.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// `GET /health`
#[allow(clippy::unused_async)]
pub async fn health() -> &'static str {
    HEALTH_MESSAGE
}

/// `GET /ready`
pub async fn ready(State(state): State<Arc<AppState>>) -> (StatusCode, Json<ReadinessResponse>) {
    let storage_healthy = state.quote_service.is_store_healthy().await;
    let (code, status) = if storage_healthy {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        code,
        Json(ReadinessResponse {
            status: status.to_string(),
            storage_healthy,
        }),
    )
}

/// `GET /api/services`
#[allow(clippy::unused_async)]
pub async fn list_services(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<Vec<CatalogEntryResponse>>> {
    let entries = state.quote_service.catalog().iter().map(Into::into).collect();
    Json(ApiResponse::ok(entries))
}

/// `POST /api/quote`
///
/// # Errors
///
/// Returns 400 for validation failures and 500 for calculation or
/// persistence failures.
pub async fn submit_quote(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<LeadResponse>>), ApiError> {
    let Json(payload) = payload?;
    let lead = state.quote_service.submit_quote(&payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok((&lead).into()))))
}

/// `POST /api/quote/preview`
///
/// # Errors
///
/// Returns 400 for validation failures and 500 for calculation failures.
#[allow(clippy::unused_async)]
pub async fn preview_quote(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ApiResponse<BreakdownResponse>>, ApiError> {
    let Json(payload) = payload?;
    let breakdown = state.quote_service.price_selection(&payload)?;
    Ok(Json(ApiResponse::ok((&breakdown).into())))
}
