//! # Domain Layer
//!
//! Catalog, selection, pricing and lead types with no infrastructure
//! dependencies.

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;
