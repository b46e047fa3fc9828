//! # In-Memory Repositories
//!
//! In-memory implementations for testing without database dependencies.
//!
//! ## Thread Safety
//!
//! All implementations use `Arc<RwLock<HashMap>>` for thread-safe access.

pub mod lead_repository;

pub use lead_repository::InMemoryLeadRepository;
