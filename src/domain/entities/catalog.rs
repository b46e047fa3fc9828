//! # Service Catalog
//!
//! Immutable mapping from service identifier to display name, unit price
//! and billing unit.
//!
//! The catalog is built once at startup and shared behind an `Arc`; it is
//! never mutated afterwards, so concurrent readers need no locking.
//!
//! # Examples
//!
//! ```
//! use quote_leads::domain::entities::catalog::Catalog;
//! use quote_leads::domain::value_objects::Money;
//!
//! let catalog = Catalog::standard();
//! let seo = catalog.lookup("seo").unwrap();
//! assert_eq!(seo.unit_price(), Money::from_units(300));
//! assert!(catalog.lookup("unknown_service").is_none());
//! ```

use crate::domain::errors::CatalogError;
use crate::domain::value_objects::{BillingUnit, Money, ServiceId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A sellable service with its price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    id: ServiceId,
    name: String,
    unit_price: Money,
    billing_unit: BillingUnit,
}

impl CatalogEntry {
    /// Creates a catalog entry.
    #[must_use]
    pub fn new(
        id: impl Into<ServiceId>,
        name: impl Into<String>,
        unit_price: Money,
        billing_unit: BillingUnit,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
            billing_unit,
        }
    }

    /// Returns the service identifier.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &ServiceId {
        &self.id
    }

    /// Returns the display name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the price of one unit.
    #[inline]
    #[must_use]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Returns how the service is billed.
    #[inline]
    #[must_use]
    pub fn billing_unit(&self) -> BillingUnit {
        self.billing_unit
    }
}

/// Fixed set of catalog entries, kept in definition order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<ServiceId, usize>,
}

impl Catalog {
    /// Builds a catalog from entries.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::EmptyIdentifier` for a blank identifier and
    /// `CatalogError::DuplicateEntry` when two entries share an identifier.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if entry.id.is_blank() {
                return Err(CatalogError::EmptyIdentifier);
            }
            if index.insert(entry.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateEntry(entry.id.to_string()));
            }
        }
        Ok(Self { entries, index })
    }

    /// The catalog this service ships with.
    ///
    /// - `web_dev`: Web Development, 500 one-time
    /// - `seo`: SEO, 300 per month
    /// - `smm`: Social Media Management, 200 per month
    #[must_use]
    pub fn standard() -> Self {
        let entries = vec![
            CatalogEntry::new(
                "web_dev",
                "Web Development",
                Money::from_units(500),
                BillingUnit::OneTime,
            ),
            CatalogEntry::new("seo", "SEO", Money::from_units(300), BillingUnit::Monthly),
            CatalogEntry::new(
                "smm",
                "Social Media Management",
                Money::from_units(200),
                BillingUnit::Monthly,
            ),
        ];
        let index = entries
            .iter()
            .enumerate()
            .map(|(position, entry)| (entry.id.clone(), position))
            .collect();
        Self { entries, index }
    }

    /// Looks up an entry by identifier. Absence is a normal outcome.
    #[must_use]
    pub fn lookup(&self, id: &str) -> Option<&CatalogEntry> {
        self.index
            .get(id)
            .and_then(|&position| self.entries.get(position))
    }

    /// Returns true if the identifier is in the catalog.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Iterates over entries in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_has_three_entries() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.len(), 3);

        let ids: Vec<&str> = catalog.iter().map(|e| e.id().as_str()).collect();
        assert_eq!(ids, vec!["web_dev", "seo", "smm"]);
    }

    #[test]
    fn standard_catalog_prices() {
        let catalog = Catalog::standard();

        let web = catalog.lookup("web_dev").unwrap();
        assert_eq!(web.name(), "Web Development");
        assert_eq!(web.unit_price(), Money::from_units(500));
        assert_eq!(web.billing_unit(), BillingUnit::OneTime);

        let smm = catalog.lookup("smm").unwrap();
        assert_eq!(smm.name(), "Social Media Management");
        assert_eq!(smm.unit_price(), Money::from_units(200));
        assert!(smm.billing_unit().is_recurring());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let catalog = Catalog::standard();
        assert!(catalog.lookup("SEO").is_none());
        assert!(catalog.contains("seo"));
    }

    #[test]
    fn new_rejects_duplicates() {
        let entry = CatalogEntry::new("x", "X", Money::from_units(1), BillingUnit::OneTime);
        let err = Catalog::new(vec![entry.clone(), entry]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateEntry("x".into()));
    }

    #[test]
    fn new_rejects_blank_identifier() {
        let entry = CatalogEntry::new(" ", "Blank", Money::from_units(1), BillingUnit::OneTime);
        assert_eq!(
            Catalog::new(vec![entry]).unwrap_err(),
            CatalogError::EmptyIdentifier
        );
    }

    #[test]
    fn new_matches_standard() {
        let rebuilt = Catalog::new(Catalog::standard().iter().cloned().collect()).unwrap();
        assert_eq!(rebuilt, Catalog::standard());
    }
}
