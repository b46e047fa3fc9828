//! # Repository Traits
//!
//! Port definitions for persistence abstraction.
//!
//! The quote flow only ever inserts leads; nothing here reads them back for
//! business decisions. Implementations can use PostgreSQL or in-memory
//! storage.
//!
//! # Examples
//!
//! ```ignore
//! use quote_leads::infrastructure::persistence::traits::LeadRepository;
//!
//! async fn persist(repo: &dyn LeadRepository, breakdown: QuoteBreakdown) {
//!     let lead = repo.save(breakdown, None).await?;
//!     println!("stored lead {}", lead.id());
//! }
//! ```

use crate::domain::entities::{Lead, QuoteBreakdown};
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Duplicate entity.
    #[error("Duplicate entity: {entity_type} with id {id} already exists")]
    Duplicate {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Query error.
    #[error("Query error: {0}")]
    Query(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepositoryError {
    /// Creates a duplicate error.
    #[must_use]
    pub fn duplicate(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates a query error.
    #[must_use]
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Returns true if the store could not be reached at all.
    #[must_use]
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => Self::Connection(err.to_string()),
            other => Self::Query(other.to_string()),
        }
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Append-only store of leads.
#[async_trait]
pub trait LeadRepository: Send + Sync + fmt::Debug {
    /// Inserts a new lead.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Duplicate` if a lead with the same id
    /// exists, or a connection/query error if the store is unavailable.
    async fn insert(&self, lead: &Lead) -> RepositoryResult<()>;

    /// Persists a breakdown as a new lead with a server-assigned id and
    /// creation timestamp.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`insert`](LeadRepository::insert).
    async fn save(
        &self,
        breakdown: QuoteBreakdown,
        email: Option<String>,
    ) -> RepositoryResult<Lead> {
        let lead = Lead::new(breakdown, email);
        self.insert(&lead).await?;
        Ok(lead)
    }

    /// Returns true if the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns an error if the check itself could not be performed.
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let err = RepositoryError::duplicate("Lead", "abc");
        assert!(err.to_string().contains("abc"));
        assert!(!err.is_connection());

        let err = RepositoryError::connection("refused");
        assert!(err.to_string().contains("refused"));
        assert!(err.is_connection());
    }

    #[test]
    fn sqlx_pool_timeout_is_connection() {
        let err: RepositoryError = sqlx::Error::PoolTimedOut.into();
        assert!(err.is_connection());
    }

    #[test]
    fn sqlx_row_not_found_is_query() {
        let err: RepositoryError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, RepositoryError::Query(_)));
    }
}
