//! # Quote Breakdown
//!
//! Priced result of a selection.
//!
//! This module provides [`QuoteLineItem`], one priced catalog service, and
//! [`QuoteBreakdown`], the itemized lines plus subtotal, tax and grand total.
//!
//! # Invariants
//!
//! - `line_total == unit_price * quantity` for every line
//! - `subtotal == sum(line_total)`
//! - `grand_total == subtotal + tax_amount`
//!
//! # Examples
//!
//! ```
//! use quote_leads::domain::entities::quote::{QuoteBreakdown, QuoteLineItem};
//! use quote_leads::domain::value_objects::Money;
//!
//! let line = QuoteLineItem::price("web_dev", "Web Development", Money::from_units(500), 1).unwrap();
//! let breakdown = QuoteBreakdown::from_parts(
//!     vec![line],
//!     Money::from_units(500),
//!     Money::from_units(50),
//!     Money::from_units(550),
//! );
//! assert!(breakdown.is_consistent());
//! ```

use crate::domain::value_objects::{ArithmeticResult, Money, ServiceId};
use serde::{Deserialize, Serialize};

/// One priced line of a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteLineItem {
    service_id: ServiceId,
    name: String,
    unit_price: Money,
    quantity: u32,
    line_total: Money,
}

impl QuoteLineItem {
    /// Prices `quantity` units at `unit_price`.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the line total does not fit.
    pub fn price(
        service_id: impl Into<ServiceId>,
        name: impl Into<String>,
        unit_price: Money,
        quantity: u32,
    ) -> ArithmeticResult<Self> {
        let line_total = unit_price.times(quantity)?;
        Ok(Self {
            service_id: service_id.into(),
            name: name.into(),
            unit_price,
            quantity,
            line_total,
        })
    }

    /// Returns the service identifier.
    #[inline]
    #[must_use]
    pub fn service_id(&self) -> &ServiceId {
        &self.service_id
    }

    /// Returns the display name captured at pricing time.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price captured at pricing time.
    #[inline]
    #[must_use]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Returns the quantity.
    #[inline]
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns `unit_price * quantity`.
    #[inline]
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.line_total
    }
}

/// Itemized quote with subtotal, tax and grand total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteBreakdown {
    line_items: Vec<QuoteLineItem>,
    subtotal: Money,
    tax_amount: Money,
    grand_total: Money,
}

impl QuoteBreakdown {
    /// Assembles a breakdown from already computed parts.
    ///
    /// Used by the calculator and when reconstructing from storage; the
    /// caller is responsible for the totals being consistent.
    #[must_use]
    pub fn from_parts(
        line_items: Vec<QuoteLineItem>,
        subtotal: Money,
        tax_amount: Money,
        grand_total: Money,
    ) -> Self {
        Self {
            line_items,
            subtotal,
            tax_amount,
            grand_total,
        }
    }

    /// Returns the line items in selection order.
    #[inline]
    #[must_use]
    pub fn line_items(&self) -> &[QuoteLineItem] {
        &self.line_items
    }

    /// Returns the sum of all line totals.
    #[inline]
    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    /// Returns the tax on the subtotal.
    #[inline]
    #[must_use]
    pub fn tax_amount(&self) -> Money {
        self.tax_amount
    }

    /// Returns `subtotal + tax_amount`.
    #[inline]
    #[must_use]
    pub fn grand_total(&self) -> Money {
        self.grand_total
    }

    /// Checks the line, subtotal and grand total invariants.
    ///
    /// The tax rate itself is not checked here since it belongs to the
    /// calculator that produced the breakdown.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let lines_ok = self.line_items.iter().all(|line| {
            line.unit_price
                .times(line.quantity)
                .is_ok_and(|total| total == line.line_total)
        });
        let subtotal = self
            .line_items
            .iter()
            .try_fold(Money::ZERO, |acc, line| acc.checked_add(line.line_total));
        let grand_total = self.subtotal.checked_add(self.tax_amount);

        lines_ok && subtotal == Ok(self.subtotal) && grand_total == Ok(self.grand_total)
    }
}
