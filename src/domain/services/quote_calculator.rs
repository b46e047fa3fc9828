//! # Quote Calculator
//!
//! Prices a validated selection.
//!
//! # Algorithm
//!
//! ```text
//! line_total  = unit_price * quantity        (per item, input order kept)
//! subtotal    = sum(line_total)
//! tax_amount  = round_2dp(subtotal * TAX_RATE)
//! grand_total = subtotal + tax_amount
//! ```
//!
//! All amounts are `Decimal`; nothing goes through binary floating point.
//! The calculation is pure and deterministic.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use quote_leads::domain::entities::{Catalog, SelectionItem};
//! use quote_leads::domain::services::QuoteCalculator;
//! use quote_leads::domain::value_objects::Money;
//!
//! let calculator = QuoteCalculator::new(Arc::new(Catalog::standard()));
//! let breakdown = calculator
//!     .calculate(&[SelectionItem::new("seo", 6), SelectionItem::new("smm", 3)])
//!     .unwrap();
//!
//! assert_eq!(breakdown.subtotal(), Money::from_units(2400));
//! assert_eq!(breakdown.tax_amount(), Money::from_units(240));
//! assert_eq!(breakdown.grand_total(), Money::from_units(2640));
//! ```

use crate::domain::entities::{Catalog, QuoteBreakdown, QuoteLineItem, SelectionItem};
use crate::domain::errors::CalculationError;
use crate::domain::value_objects::Money;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Fixed tax rate applied to the subtotal (10%).
pub const TAX_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Prices selections against a catalog.
#[derive(Debug, Clone)]
pub struct QuoteCalculator {
    catalog: Arc<Catalog>,
}

impl QuoteCalculator {
    /// Creates a calculator bound to a catalog.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Returns the tax rate in effect.
    #[must_use]
    pub const fn tax_rate(&self) -> Decimal {
        TAX_RATE
    }

    /// Prices a validated selection.
    ///
    /// # Errors
    ///
    /// Returns `CalculationError::UnpricedService` if an item is missing
    /// from the catalog and `CalculationError::Arithmetic` on overflow.
    /// Neither happens for items validated against the same catalog.
    pub fn calculate(&self, items: &[SelectionItem]) -> Result<QuoteBreakdown, CalculationError> {
        let mut line_items = Vec::with_capacity(items.len());
        let mut subtotal = Money::ZERO;

        for item in items {
            let entry = self
                .catalog
                .lookup(item.service_id().as_str())
                .ok_or_else(|| CalculationError::UnpricedService(item.service_id().to_string()))?;

            let line = QuoteLineItem::price(
                entry.id().clone(),
                entry.name(),
                entry.unit_price(),
                item.quantity(),
            )?;
            subtotal = subtotal.checked_add(line.line_total())?;
            line_items.push(line);
        }

        let tax_amount = subtotal.apply_rate(TAX_RATE)?;
        let grand_total = subtotal.checked_add(tax_amount)?;

        Ok(QuoteBreakdown::from_parts(
            line_items,
            subtotal,
            tax_amount,
            grand_total,
        ))
    }
}
