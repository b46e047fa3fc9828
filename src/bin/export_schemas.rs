//! # JSON Schema Exporter
//!
//! Writes JSON Schemas for the REST request and response bodies so UI
//! clients can validate against the same contract the server enforces.
//!
//! ```bash
//! cargo run --bin export_schemas --features cli
//! cargo run --bin export_schemas --features cli -- --out-dir docs/schemas
//! ```

use anyhow::Context;
use clap::Parser;
use quote_leads::api::rest::{
    ApiResponse, BreakdownResponse, CatalogEntryResponse, ErrorResponse, LeadResponse,
    QuoteRequest, ReadinessResponse,
};
use schemars::schema::RootSchema;
use schemars::schema_for;
use std::fs;
use std::path::PathBuf;

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "export_schemas", about = "Export JSON Schemas for the quote API")]
struct Args {
    /// Directory the schema files are written to.
    #[arg(short, long, default_value = "docs/schemas")]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create {}", args.out_dir.display()))?;

    let schemas: [(&str, RootSchema); 6] = [
        ("quote_request", schema_for!(QuoteRequest)),
        ("quote_response", schema_for!(ApiResponse<LeadResponse>)),
        ("preview_response", schema_for!(ApiResponse<BreakdownResponse>)),
        ("services_response", schema_for!(ApiResponse<Vec<CatalogEntryResponse>>)),
        ("error_response", schema_for!(ErrorResponse)),
        ("readiness_response", schema_for!(ReadinessResponse)),
    ];

    for (name, schema) in schemas {
        let path = args.out_dir.join(format!("{name}.schema.json"));
        let json = serde_json::to_string_pretty(&schema)
            .with_context(|| format!("failed to serialize {name}"))?;
        fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
        println!("wrote {}", path.display());
    }

    Ok(())
}
