//! # Money Value Object
//!
//! Non-negative decimal currency amount.
//!
//! All pricing is done on [`Money`] backed by `rust_decimal::Decimal`, never
//! on binary floating point. Conversion to `f64` happens only at the JSON
//! boundary.
//!
//! # Examples
//!
//! ```
//! use quote_leads::domain::value_objects::Money;
//!
//! let unit = Money::from_units(300);
//! let line = unit.times(6).unwrap();
//! assert_eq!(line, Money::from_units(1800));
//! ```

use crate::domain::value_objects::arithmetic::{
    round_currency, ArithmeticError, ArithmeticResult, CheckedArithmetic,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative amount of money in the single supported currency.
///
/// # Invariants
///
/// - Amount is never negative
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates an amount from a decimal value.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Underflow` if the value is negative.
    pub fn new(amount: Decimal) -> ArithmeticResult<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(ArithmeticError::Underflow);
        }
        Ok(Self(amount))
    }

    /// Creates an amount from whole currency units.
    #[must_use]
    pub fn from_units(units: u32) -> Self {
        Self(Decimal::from(units))
    }

    /// Returns the underlying decimal amount.
    #[inline]
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Adds another amount.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the sum does not fit.
    pub fn checked_add(self, rhs: Self) -> ArithmeticResult<Self> {
        self.0.safe_add(rhs.0).map(Self)
    }

    /// Multiplies the amount by a unit count.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the product does not fit.
    pub fn times(self, quantity: u32) -> ArithmeticResult<Self> {
        self.0.safe_mul(Decimal::from(quantity)).map(Self)
    }

    /// Applies a non-negative rate and rounds to the currency scale.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the product does not fit.
    pub fn apply_rate(self, rate: Decimal) -> ArithmeticResult<Self> {
        let raw = self.0.safe_mul(rate)?;
        Self::new(round_currency(raw))
    }

    /// Returns the amount as `f64` for serialization at the JSON boundary.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(f64::MAX)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_amounts() {
        assert_eq!(
            Money::new(Decimal::new(-1, 0)),
            Err(ArithmeticError::Underflow)
        );
        assert!(Money::new(Decimal::ZERO).is_ok());
    }

    #[test]
    fn times_multiplies_units() {
        assert_eq!(
            Money::from_units(200).times(3).unwrap(),
            Money::from_units(600)
        );
        assert!(Money::from_units(500).times(0).unwrap().is_zero());
    }

    #[test]
    fn checked_add_sums() {
        let sum = Money::from_units(1800)
            .checked_add(Money::from_units(600))
            .unwrap();
        assert_eq!(sum, Money::from_units(2400));
    }

    #[test]
    fn apply_rate_rounds_to_cents() {
        let amount = Money::new(Decimal::new(1999, 2)).unwrap();
        let tax = amount.apply_rate(Decimal::new(10, 2)).unwrap();
        assert_eq!(tax.amount(), Decimal::new(200, 2));
    }

    #[test]
    fn display_is_normalized() {
        let amount = Money::new(Decimal::new(55000, 2)).unwrap();
        assert_eq!(amount.to_string(), "550");
    }

    #[test]
    fn to_f64_at_boundary() {
        assert_eq!(Money::from_units(2640).to_f64(), 2640.0);
    }
}
