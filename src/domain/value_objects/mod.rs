//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`ServiceId`]: catalog entry key
//! - [`LeadId`]: UUID of a persisted lead
//!
//! ## Numeric Types
//!
//! - [`Money`]: non-negative decimal currency amount
//! - [`CheckedArithmetic`]: Trait for safe arithmetic operations
//!
//! ## Domain Enums
//!
//! - [`BillingUnit`]: one-time or monthly billing
//! - [`SubmissionStage`]: lifecycle of a quote submission

pub mod arithmetic;
pub mod enums;
pub mod ids;
pub mod money;
pub mod submission_stage;
pub mod timestamp;

pub use arithmetic::{round_currency, ArithmeticError, ArithmeticResult, CheckedArithmetic};
pub use enums::BillingUnit;
pub use ids::{LeadId, ServiceId};
pub use money::Money;
pub use submission_stage::SubmissionStage;
pub use timestamp::Timestamp;
