//! # quote-leads
//!
//! Service quote pricing engine.
//!
//! A client submits a selection of catalog services with quantities. The
//! selection is validated, priced (line totals, subtotal, 10% tax, grand
//! total) and the accepted quote is stored as a sales lead.
//!
//! # Architecture
//!
//! - [`domain`]: catalog, selection, pricing and lead types
//! - [`application`]: the quote submission use case
//! - [`infrastructure`]: lead storage and configuration
//! - [`api`]: REST endpoints
//! - [`telemetry`]: tracing setup
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use quote_leads::domain::entities::Catalog;
//! use quote_leads::domain::services::{QuoteCalculator, QuoteValidator};
//! use quote_leads::domain::value_objects::Money;
//! use serde_json::json;
//!
//! let catalog = Arc::new(Catalog::standard());
//! let items = QuoteValidator::new(Arc::clone(&catalog))
//!     .validate(Some(&json!([{ "id": "web_dev", "quantity": 1 }])))
//!     .unwrap();
//! let quote = QuoteCalculator::new(catalog).calculate(&items).unwrap();
//! assert_eq!(quote.grand_total(), Money::from_units(550));
//! ```

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;
