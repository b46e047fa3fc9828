//! # Application Layer
//!
//! Use cases that tie the domain to the lead store.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult, ErrorKind};
pub use services::QuoteService;
