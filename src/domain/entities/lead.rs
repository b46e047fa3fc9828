//! # Lead Entity
//!
//! Persisted record of an accepted, priced quote.
//!
//! A lead is created once by the quote service and never mutated
//! afterwards. Its identifier and creation timestamp are assigned by the
//! server at creation time.
//!
//! # Examples
//!
//! ```
//! use quote_leads::domain::entities::lead::Lead;
//! use quote_leads::domain::entities::quote::QuoteBreakdown;
//! use quote_leads::domain::value_objects::Money;
//!
//! let breakdown = QuoteBreakdown::from_parts(vec![], Money::ZERO, Money::ZERO, Money::ZERO);
//! let lead = Lead::new(breakdown, Some("buyer@example.com".to_string()));
//! assert_eq!(lead.email(), "buyer@example.com");
//! ```

use crate::domain::entities::quote::QuoteBreakdown;
use crate::domain::value_objects::{LeadId, Timestamp};
use serde::{Deserialize, Serialize};

/// An accepted quote stored as a sales lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    id: LeadId,
    breakdown: QuoteBreakdown,
    email: String,
    created_at: Timestamp,
}

impl Lead {
    /// Creates a lead with a fresh identifier and the current time.
    ///
    /// A missing email is stored as an empty string; surrounding whitespace
    /// is trimmed.
    #[must_use]
    pub fn new(breakdown: QuoteBreakdown, email: Option<String>) -> Self {
        Self {
            id: LeadId::new_v4(),
            breakdown,
            email: email.map(|e| e.trim().to_string()).unwrap_or_default(),
            created_at: Timestamp::now(),
        }
    }

    /// Reconstructs a lead from storage without assigning new values.
    #[must_use]
    pub fn from_parts(
        id: LeadId,
        breakdown: QuoteBreakdown,
        email: String,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            breakdown,
            email,
            created_at,
        }
    }

    /// Returns the lead identifier.
    #[inline]
    #[must_use]
    pub fn id(&self) -> LeadId {
        self.id
    }

    /// Returns the priced quote.
    #[inline]
    #[must_use]
    pub fn breakdown(&self) -> &QuoteBreakdown {
        &self.breakdown
    }

    /// Returns the contact email, empty if none was given.
    #[inline]
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns true if a contact email was captured.
    #[must_use]
    pub fn has_email(&self) -> bool {
        !self.email.is_empty()
    }

    /// Returns when the lead was created.
    #[inline]
    #[must_use]
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Money;

    fn empty_breakdown() -> QuoteBreakdown {
        QuoteBreakdown::from_parts(vec![], Money::ZERO, Money::ZERO, Money::ZERO)
    }

    #[test]
    fn missing_email_is_empty() {
        let lead = Lead::new(empty_breakdown(), None);
        assert_eq!(lead.email(), "");
        assert!(!lead.has_email());
    }

    #[test]
    fn email_is_trimmed() {
        let lead = Lead::new(empty_breakdown(), Some("  a@b.io ".to_string()));
        assert_eq!(lead.email(), "a@b.io");
        assert!(lead.has_email());
    }

    #[test]
    fn each_lead_gets_its_own_id() {
        let a = Lead::new(empty_breakdown(), None);
        let b = Lead::new(empty_breakdown(), None);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn from_parts_keeps_values() {
        let original = Lead::new(empty_breakdown(), Some("x@y.z".into()));
        let rebuilt = Lead::from_parts(
            original.id(),
            original.breakdown().clone(),
            original.email().to_string(),
            original.created_at(),
        );
        assert_eq!(original, rebuilt);
    }
}
