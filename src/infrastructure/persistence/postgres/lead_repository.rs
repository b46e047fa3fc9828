//! # PostgreSQL Lead Repository
//!
//! PostgreSQL implementation of [`LeadRepository`] using sqlx.
//!
//! Leads are inserted into the `leads` table with line items as JSONB and
//! money columns as `NUMERIC`. Rows are never updated or deleted.

use crate::domain::entities::Lead;
use crate::infrastructure::persistence::traits::{
    LeadRepository, RepositoryError, RepositoryResult,
};
use async_trait::async_trait;
use sqlx::PgPool;

/// Unique-violation SQLSTATE.
const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL implementation of [`LeadRepository`].
///
/// # Examples
///
/// ```ignore
/// use sqlx::PgPool;
/// use quote_leads::infrastructure::persistence::postgres::PostgresLeadRepository;
///
/// let pool = PgPool::connect("postgres://...").await?;
/// let repo = PostgresLeadRepository::new(pool);
/// ```
#[derive(Debug, Clone)]
pub struct PostgresLeadRepository {
    pool: PgPool,
}

impl PostgresLeadRepository {
    /// Creates a new PostgreSQL lead repository.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl LeadRepository for PostgresLeadRepository {
    async fn insert(&self, lead: &Lead) -> RepositoryResult<()> {
        let breakdown = lead.breakdown();
        let services = serde_json::to_value(breakdown.line_items())
            .map_err(|e| RepositoryError::serialization(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO leads (
                id, services, subtotal, tax_amount,
                grand_total, user_email, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(lead.id().as_uuid())
        .bind(&services)
        .bind(breakdown.subtotal().amount())
        .bind(breakdown.tax_amount().amount())
        .bind(breakdown.grand_total().amount())
        .bind(lead.email())
        .bind(lead.created_at().timestamp_millis())
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                RepositoryError::duplicate("Lead", lead.id().to_string())
            }
            other => RepositoryError::from(other),
        })?;

        Ok(())
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| true)
            .map_err(RepositoryError::from)
    }
}
