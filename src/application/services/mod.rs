//! # Application Services
//!
//! Services that orchestrate domain logic and infrastructure.
//!
//! - [`QuoteService`]: validates, prices and persists quote submissions

pub mod quote_service;

pub use quote_service::QuoteService;
