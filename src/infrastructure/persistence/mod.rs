//! # Persistence Layer
//!
//! Lead storage port and its implementations.
//!
//! ## Repository Traits (Ports)
//!
//! - [`LeadRepository`]: append-only persistence for leads
//!
//! ## Implementations
//!
//! - `in_memory`: In-memory store for tests and database-less runs
//! - `postgres`: PostgreSQL store with connection bootstrap

pub mod in_memory;
pub mod postgres;
pub mod traits;

pub use in_memory::InMemoryLeadRepository;
pub use postgres::PostgresLeadRepository;
pub use traits::{LeadRepository, RepositoryError, RepositoryResult};
