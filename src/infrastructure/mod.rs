//! # Infrastructure Layer
//!
//! Adapters to the outside world: lead storage and configuration.

pub mod config;
pub mod persistence;
