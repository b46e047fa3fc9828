//! # Domain Entities
//!
//! Core business concepts of the quote flow.
//!
//! ## Aggregates
//!
//! - [`Lead`]: persisted, priced quote with optional contact email
//!
//! ## Entities
//!
//! - [`Catalog`] / [`CatalogEntry`]: fixed price list
//! - [`SelectionItem`]: validated (service, quantity) pair
//! - [`QuoteBreakdown`] / [`QuoteLineItem`]: priced selection

pub mod catalog;
pub mod lead;
pub mod quote;
pub mod selection;

pub use catalog::{Catalog, CatalogEntry};
pub use lead::Lead;
pub use quote::{QuoteBreakdown, QuoteLineItem};
pub use selection::SelectionItem;
