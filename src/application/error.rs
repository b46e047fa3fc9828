//! # Application Errors
//!
//! Error types for the quote submission use case.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── Validation(ValidationError)        - client error, message safe to return
//! ├── Calculation(CalculationError)      - server error, opaque to the caller
//! └── PersistenceUnavailable(RepositoryError) - server error, opaque to the caller
//! ```
//!
//! # Examples
//!
//! ```
//! use quote_leads::application::error::ApplicationError;
//! use quote_leads::domain::errors::ValidationError;
//! use quote_leads::infrastructure::persistence::RepositoryError;
//!
//! let err: ApplicationError = ValidationError::EmptySelection.into();
//! assert!(err.is_client_error());
//!
//! let err: ApplicationError = RepositoryError::connection("refused").into();
//! assert!(err.is_server_error());
//! ```

use crate::domain::errors::{CalculationError, ValidationError};
use crate::infrastructure::persistence::RepositoryError;
use std::fmt;
use thiserror::Error;

/// Category of a submission failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Payload or selection shape is wrong.
    MalformedPayload,
    /// Selection is empty.
    EmptySelection,
    /// Unknown service identifier.
    UnknownService,
    /// Quantity is not a positive integer.
    InvalidQuantity,
    /// Service listed twice.
    DuplicateService,
    /// Pricing failed.
    CalculationFailed,
    /// Lead store unavailable.
    PersistenceUnavailable,
}

impl ErrorKind {
    /// Returns a stable machine-readable code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::MalformedPayload => "MALFORMED_PAYLOAD",
            Self::EmptySelection => "EMPTY_SELECTION",
            Self::UnknownService => "UNKNOWN_SERVICE",
            Self::InvalidQuantity => "INVALID_QUANTITY",
            Self::DuplicateService => "DUPLICATE_SERVICE",
            Self::CalculationFailed => "CALCULATION_FAILED",
            Self::PersistenceUnavailable => "PERSISTENCE_UNAVAILABLE",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The selection failed validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The validated selection could not be priced.
    #[error("calculation error: {0}")]
    Calculation(#[from] CalculationError),

    /// The lead could not be written.
    #[error("persistence unavailable: {0}")]
    PersistenceUnavailable(#[from] RepositoryError),
}

impl ApplicationError {
    /// Returns the failure category.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(e) => match e {
                ValidationError::MalformedPayload => ErrorKind::MalformedPayload,
                ValidationError::EmptySelection => ErrorKind::EmptySelection,
                ValidationError::UnknownService(_) => ErrorKind::UnknownService,
                ValidationError::InvalidQuantity(_) => ErrorKind::InvalidQuantity,
                ValidationError::DuplicateService(_) => ErrorKind::DuplicateService,
            },
            Self::Calculation(_) => ErrorKind::CalculationFailed,
            Self::PersistenceUnavailable(_) => ErrorKind::PersistenceUnavailable,
        }
    }

    /// Returns true if the caller sent a request that can be corrected.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if the failure is on the server side.
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        !self.is_client_error()
    }

    /// Returns the message safe to show the caller.
    ///
    /// Validation messages are returned verbatim; server-side failures are
    /// reduced to a generic message so no internal detail leaks.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::Calculation(_) | Self::PersistenceUnavailable(_) => {
                "Internal Server Error".to_string()
            }
        }
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
