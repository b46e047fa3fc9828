//! # Domain Services
//!
//! Stateless pricing logic over the catalog.
//!
//! - [`QuoteValidator`]: raw selection to validated items
//! - [`QuoteCalculator`]: validated items to a priced breakdown

pub mod quote_calculator;
pub mod quote_validator;

pub use quote_calculator::{QuoteCalculator, TAX_RATE};
pub use quote_validator::QuoteValidator;
