//! # Quote Service
//!
//! Orchestrates one quote submission:
//!
//! ```text
//! Received → Validating → Calculating → Persisting → Completed
//! ```
//!
//! Validation failures exit as client errors; calculation and persistence
//! failures exit as server errors. A request either produces exactly one
//! persisted lead or none. Nothing is shared between requests apart from
//! the read-only catalog and the lead store handle.
//!
//! # Payload
//!
//! ```json
//! { "selection": [{ "id": "seo", "quantity": 6 }], "email": "optional@example.com" }
//! ```
//!
//! A present `email` that is not a string (or `null`) is a malformed
//! payload; it is checked after the selection rules.

use crate::application::error::ApplicationResult;
use crate::domain::entities::{Catalog, Lead, QuoteBreakdown};
use crate::domain::errors::ValidationError;
use crate::domain::services::{QuoteCalculator, QuoteValidator};
use crate::domain::value_objects::SubmissionStage;
use crate::infrastructure::persistence::LeadRepository;
use serde_json::Value;
use std::sync::Arc;

/// Payload field holding the selection array.
pub const SELECTION_FIELD: &str = "selection";

/// Payload field holding the optional contact email.
pub const EMAIL_FIELD: &str = "email";

/// Validates, prices and persists quote submissions.
#[derive(Debug, Clone)]
pub struct QuoteService {
    catalog: Arc<Catalog>,
    validator: QuoteValidator,
    calculator: QuoteCalculator,
    repository: Arc<dyn LeadRepository>,
}

impl QuoteService {
    /// Creates a quote service over a catalog and a lead store.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, repository: Arc<dyn LeadRepository>) -> Self {
        Self {
            validator: QuoteValidator::new(Arc::clone(&catalog)),
            calculator: QuoteCalculator::new(Arc::clone(&catalog)),
            catalog,
            repository,
        }
    }

    /// Returns the catalog quotes are priced against.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Validates and prices a payload without persisting anything.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Validation` for a rejected selection and
    /// `ApplicationError::Calculation` if pricing fails.
    pub fn price_selection(&self, payload: &Value) -> ApplicationResult<QuoteBreakdown> {
        let items = self.validator.validate(payload.get(SELECTION_FIELD))?;
        Ok(self.calculator.calculate(&items)?)
    }

    /// Runs a full submission and returns the persisted lead.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Validation` (client error) for a rejected
    /// payload, `ApplicationError::Calculation` if pricing fails, and
    /// `ApplicationError::PersistenceUnavailable` if the store write fails.
    /// No lead is persisted in any error case.
    pub async fn submit_quote(&self, payload: &Value) -> ApplicationResult<Lead> {
        let mut stage = SubmissionStage::Received;

        enter(&mut stage, SubmissionStage::Validating);
        let validated = self
            .validator
            .validate(payload.get(SELECTION_FIELD))
            .and_then(|items| Ok((items, parse_email(payload)?)));
        let (items, email) = match validated {
            Ok(ok) => ok,
            Err(e) => {
                enter(&mut stage, SubmissionStage::Rejected);
                tracing::info!(code = e.code(), reason = %e, "quote rejected");
                return Err(e.into());
            }
        };

        enter(&mut stage, SubmissionStage::Calculating);
        let breakdown = match self.calculator.calculate(&items) {
            Ok(breakdown) => breakdown,
            Err(e) => {
                enter(&mut stage, SubmissionStage::Failed);
                tracing::error!(error = %e, "quote calculation failed");
                return Err(e.into());
            }
        };

        enter(&mut stage, SubmissionStage::Persisting);
        let lead = match self.repository.save(breakdown, email).await {
            Ok(lead) => lead,
            Err(e) => {
                enter(&mut stage, SubmissionStage::Failed);
                tracing::error!(error = %e, "failed to persist lead");
                return Err(e.into());
            }
        };

        enter(&mut stage, SubmissionStage::Completed);
        tracing::info!(
            lead_id = %lead.id(),
            items = lead.breakdown().line_items().len(),
            grand_total = %lead.breakdown().grand_total(),
            has_email = lead.has_email(),
            "lead created"
        );
        Ok(lead)
    }

    /// Returns true if the lead store reports itself reachable.
    pub async fn is_store_healthy(&self) -> bool {
        match self.repository.health_check().await {
            Ok(healthy) => healthy,
            Err(e) => {
                tracing::warn!(error = %e, "lead store health check failed");
                false
            }
        }
    }
}

/// Extracts the optional contact email.
fn parse_email(payload: &Value) -> Result<Option<String>, ValidationError> {
    match payload.get(EMAIL_FIELD) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(email)) => Ok(Some(email.clone())),
        Some(_) => Err(ValidationError::MalformedPayload),
    }
}

/// Moves the submission to its next stage.
fn enter(stage: &mut SubmissionStage, next: SubmissionStage) {
    match stage.advance(next) {
        Ok(previous) => tracing::debug!(from = %previous, to = %next, "submission stage"),
        Err(e) => tracing::error!(error = %e, "submission stage out of order"),
    }
}
