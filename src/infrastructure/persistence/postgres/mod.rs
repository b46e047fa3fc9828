//! # PostgreSQL Persistence
//!
//! sqlx-backed lead storage and the connection bootstrap for it.
//!
//! [`connect_with_retry`] owns the store-connection lifecycle: it keeps
//! retrying until the database accepts connections (containers commonly
//! start the service before the database is ready), then makes sure the
//! schema exists. The quote flow itself never retries.

pub mod lead_repository;

pub use lead_repository::PostgresLeadRepository;

use crate::infrastructure::config::DatabaseSettings;
use crate::infrastructure::persistence::traits::{RepositoryError, RepositoryResult};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

/// DDL for the leads table.
const CREATE_LEADS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS leads (
    id          UUID PRIMARY KEY,
    services    JSONB NOT NULL,
    subtotal    NUMERIC NOT NULL,
    tax_amount  NUMERIC NOT NULL,
    grand_total NUMERIC NOT NULL,
    user_email  TEXT NOT NULL DEFAULT '',
    created_at  BIGINT NOT NULL
)
"#;

/// Connects to PostgreSQL, retrying on failure, and ensures the schema.
///
/// Waits `connect_retry_secs` between attempts. With
/// `connect_max_attempts == 0` it retries forever.
///
/// # Errors
///
/// Returns `RepositoryError::Connection` once `connect_max_attempts` is
/// exhausted, or the schema error if table creation fails.
pub async fn connect_with_retry(settings: &DatabaseSettings, url: &str) -> RepositoryResult<PgPool> {
    let mut attempt: u32 = 0;
    let delay = Duration::from_secs(settings.connect_retry_secs);

    let pool = loop {
        attempt = attempt.saturating_add(1);
        let result = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
            .connect(url)
            .await;

        match result {
            Ok(pool) => {
                tracing::info!(attempt, "database connected");
                break pool;
            }
            Err(e) => {
                if settings.connect_max_attempts != 0 && attempt >= settings.connect_max_attempts {
                    tracing::error!(error = %e, attempt, "database connection failed, giving up");
                    return Err(RepositoryError::connection(e.to_string()));
                }
                tracing::warn!(
                    error = %e,
                    attempt,
                    retry_in_secs = settings.connect_retry_secs,
                    "database connection failed, retrying"
                );
                tokio::time::sleep(delay).await;
            }
        }
    };

    ensure_schema(&pool).await?;
    Ok(pool)
}

/// Creates the leads table if it does not exist.
///
/// # Errors
///
/// Returns a repository error if the DDL fails.
pub async fn ensure_schema(pool: &PgPool) -> RepositoryResult<()> {
    sqlx::query(CREATE_LEADS_TABLE).execute(pool).await?;
    Ok(())
}
