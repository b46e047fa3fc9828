//! # Domain Errors
//!
//! Error types raised by domain logic.
//!
//! - [`ValidationError`]: a selection payload broke a validation rule
//! - [`CalculationError`]: a validated selection could not be priced
//! - [`CatalogError`]: a catalog could not be constructed
//!
//! Validation messages are human readable and name the offending service
//! identifier where one exists, so they can be returned to the caller as-is.

use crate::domain::value_objects::ArithmeticError;
use thiserror::Error;

/// Rule violated by a raw selection payload.
///
/// Only the first violation is reported; see
/// [`QuoteValidator`](crate::domain::services::QuoteValidator).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Payload absent, not an object, or `selection` is not an array.
    #[error("Invalid data format. Expected an array of services.")]
    MalformedPayload,

    /// Selection array is empty.
    #[error("Please select at least one service.")]
    EmptySelection,

    /// Selection references an identifier missing from the catalog.
    #[error("Invalid service selected: {0}")]
    UnknownService(String),

    /// Quantity is not an integer >= 1.
    #[error("Quantity for {0} must be a positive integer.")]
    InvalidQuantity(String),

    /// Same service referenced by more than one entry.
    #[error("Service selected more than once: {0}")]
    DuplicateService(String),
}

impl ValidationError {
    /// Returns a stable machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MalformedPayload => "MALFORMED_PAYLOAD",
            Self::EmptySelection => "EMPTY_SELECTION",
            Self::UnknownService(_) => "UNKNOWN_SERVICE",
            Self::InvalidQuantity(_) => "INVALID_QUANTITY",
            Self::DuplicateService(_) => "DUPLICATE_SERVICE",
        }
    }

    /// Returns the offending service identifier, if the rule names one.
    #[must_use]
    pub fn service_id(&self) -> Option<&str> {
        match self {
            Self::UnknownService(id) | Self::InvalidQuantity(id) | Self::DuplicateService(id) => {
                Some(id)
            }
            Self::MalformedPayload | Self::EmptySelection => None,
        }
    }
}

/// Failure while pricing a validated selection.
///
/// Neither variant is reachable with the shipped catalog and a selection
/// that passed validation against the same catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculationError {
    /// Money arithmetic overflowed.
    #[error("calculation failed: {0}")]
    Arithmetic(#[from] ArithmeticError),

    /// A selection item has no catalog entry.
    #[error("no catalog price for service: {0}")]
    UnpricedService(String),
}

/// Failure while building a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Entry identifier is empty.
    #[error("catalog entry identifier must not be empty")]
    EmptyIdentifier,

    /// Two entries share an identifier.
    #[error("duplicate catalog entry: {0}")]
    DuplicateEntry(String),
}
