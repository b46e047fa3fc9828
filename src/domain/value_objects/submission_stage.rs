//! # Submission Stage
//!
//! Per-request lifecycle of a quote submission.
//!
//! # State Machine
//!
//! ```text
//! Received → Validating → Calculating → Persisting → Completed
//!                ↓             ↓             ↓
//!             Rejected      Failed        Failed
//! ```
//!
//! `Rejected` is the client-error exit; `Failed` is the server-error exit.
//!
//! # Examples
//!
//! ```
//! use quote_leads::domain::value_objects::submission_stage::SubmissionStage;
//!
//! let stage = SubmissionStage::Received;
//! assert!(stage.can_transition_to(SubmissionStage::Validating));
//! assert!(!stage.can_transition_to(SubmissionStage::Persisting));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stage of a single quote submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionStage {
    /// Payload received, nothing checked yet.
    #[default]
    Received,
    /// Running the validator.
    Validating,
    /// Pricing the validated selection.
    Calculating,
    /// Writing the lead to the store.
    Persisting,
    /// Lead persisted and breakdown returned (terminal).
    Completed,
    /// Selection rejected by validation (terminal, client error).
    Rejected,
    /// Calculation or persistence failed (terminal, server error).
    Failed,
}

impl SubmissionStage {
    /// Returns true if this is a terminal stage.
    #[inline]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Rejected | Self::Failed)
    }

    /// Returns true if this stage can transition to the target stage.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Received, Self::Validating)
                | (Self::Validating, Self::Calculating)
                | (Self::Validating, Self::Rejected)
                | (Self::Calculating, Self::Persisting)
                | (Self::Calculating, Self::Failed)
                | (Self::Persisting, Self::Completed)
                | (Self::Persisting, Self::Failed)
        )
    }

    /// Moves to the target stage if the transition is allowed.
    ///
    /// Returns the previous stage on success.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStageTransition`] if the transition is not allowed.
    pub fn advance(&mut self, target: Self) -> Result<Self, InvalidStageTransition> {
        if !self.can_transition_to(target) {
            return Err(InvalidStageTransition {
                from: *self,
                to: target,
            });
        }
        Ok(std::mem::replace(self, target))
    }
}

impl fmt::Display for SubmissionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Received => "RECEIVED",
            Self::Validating => "VALIDATING",
            Self::Calculating => "CALCULATING",
            Self::Persisting => "PERSISTING",
            Self::Completed => "COMPLETED",
            Self::Rejected => "REJECTED",
            Self::Failed => "FAILED",
        };
        write!(f, "{s}")
    }
}

/// Error returned for a disallowed stage transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid submission stage transition: {from} -> {to}")]
pub struct InvalidStageTransition {
    /// Stage before the attempted transition.
    pub from: SubmissionStage,
    /// Requested stage.
    pub to: SubmissionStage,
}
