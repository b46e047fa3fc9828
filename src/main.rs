//! quote-leads server.
//!
//! Loads settings, picks the lead store, and serves the REST API until
//! Ctrl-C.

use anyhow::Context;
use clap::Parser;
use quote_leads::api::rest::{create_router, shutdown_signal, AppState};
use quote_leads::application::services::QuoteService;
use quote_leads::domain::entities::Catalog;
use quote_leads::infrastructure::config::Settings;
use quote_leads::infrastructure::persistence::postgres::{self, PostgresLeadRepository};
use quote_leads::infrastructure::persistence::{InMemoryLeadRepository, LeadRepository};
use quote_leads::telemetry;
use std::path::PathBuf;
use std::sync::Arc;

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "quote-leads", version, about = "Service quote pricing and lead capture API")]
struct Args {
    /// Path to a configuration file.
    #[arg(short, long, env = "QUOTE_LEADS_CONFIG")]
    config: Option<PathBuf>,

    /// Port to listen on, overriding configuration.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let mut settings =
        Settings::load(args.config.as_deref()).context("failed to load configuration")?;
    if let Some(port) = args.port {
        settings.server.port = port;
    }

    telemetry::init_tracing(&settings.logging)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let repository = build_repository(&settings).await?;
    let catalog = Arc::new(Catalog::standard());
    tracing::info!(services = catalog.len(), "catalog loaded");

    let quote_service = Arc::new(QuoteService::new(catalog, repository));
    let state = Arc::new(AppState::new(quote_service));
    let router = create_router(state, settings.server.body_limit_bytes);

    let addr = settings.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn build_repository(settings: &Settings) -> anyhow::Result<Arc<dyn LeadRepository>> {
    match settings.database.url.as_deref() {
        Some(url) if settings.uses_database() => {
            let pool = postgres::connect_with_retry(&settings.database, url)
                .await
                .context("failed to connect to the lead database")?;
            tracing::info!("using PostgreSQL lead store");
            Ok(Arc::new(PostgresLeadRepository::new(pool)))
        }
        _ => {
            tracing::warn!("DATABASE_URL not set, leads are kept in memory only");
            Ok(Arc::new(InMemoryLeadRepository::new()))
        }
    }
}
