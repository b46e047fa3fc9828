//! # Selection Item
//!
//! One validated (service, quantity) pair of a customer's selection.

use crate::domain::value_objects::ServiceId;
use serde::{Deserialize, Serialize};

/// A validated request to price `quantity` units of a catalog service.
///
/// Only produced by the validator, so the identifier is known to resolve
/// in the catalog it was validated against and the quantity is at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionItem {
    service_id: ServiceId,
    quantity: u32,
}

impl SelectionItem {
    /// Creates a selection item.
    #[must_use]
    pub fn new(service_id: impl Into<ServiceId>, quantity: u32) -> Self {
        Self {
            service_id: service_id.into(),
            quantity,
        }
    }

    /// Returns the referenced service.
    #[inline]
    #[must_use]
    pub fn service_id(&self) -> &ServiceId {
        &self.service_id
    }

    /// Returns the number of units.
    #[inline]
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}
