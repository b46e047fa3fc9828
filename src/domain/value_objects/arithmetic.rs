//! # Checked Arithmetic
//!
//! Traits and utilities for safe currency arithmetic.
//!
//! This module provides:
//! - [`ArithmeticError`] - Error type for arithmetic failures
//! - [`CheckedArithmetic`] - Trait for safe arithmetic operations
//! - [`round_currency`] - Rounds an amount to the currency scale
//!
//! # Examples
//!
//! ```
//! use quote_leads::domain::value_objects::arithmetic::{CheckedArithmetic, round_currency};
//! use rust_decimal::Decimal;
//!
//! let subtotal = Decimal::new(2400, 0);
//! let rate = Decimal::new(10, 2);
//! let tax = round_currency(subtotal.safe_mul(rate).unwrap());
//! assert_eq!(tax, Decimal::new(240, 0));
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Number of decimal places kept for currency amounts that are the result
/// of a rate application (tax).
pub const CURRENCY_SCALE: u32 = 2;

/// Failure of a money computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ArithmeticError {
    /// Result exceeds the representable decimal range.
    #[error("amount overflow")]
    Overflow,

    /// Result would be a negative amount.
    #[error("amount below zero")]
    Underflow,
}

/// Result of a checked money computation.
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

/// Rounds a currency amount to [`CURRENCY_SCALE`] decimal places.
///
/// Midpoints are rounded away from zero, so `0.005` becomes `0.01`.
///
/// # Examples
///
/// ```
/// use quote_leads::domain::value_objects::arithmetic::round_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_currency(Decimal::new(12345, 3)), Decimal::new(1235, 2));
/// ```
#[inline]
#[must_use]
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Overflow-checked `Decimal` operations used for money.
pub trait CheckedArithmetic: Sized {
    /// Adds `rhs`.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the sum is out of range.
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Multiplies by `rhs`.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the product is out of range.
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self>;
}

impl CheckedArithmetic for Decimal {
    #[inline]
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_add(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_mul(rhs).ok_or(ArithmeticError::Overflow)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(ArithmeticError::Overflow.to_string(), "amount overflow");
        assert_eq!(ArithmeticError::Underflow.to_string(), "amount below zero");
    }

    #[test]
    fn tax_on_odd_cents_rounds_half_up() {
        // 0.10 * 12.35 = 1.235
        let tax = round_currency(Decimal::new(1235, 2).safe_mul(Decimal::new(10, 2)).unwrap());
        assert_eq!(tax, Decimal::new(124, 2));
    }

    #[test]
    fn negative_midpoint_rounds_away_from_zero() {
        assert_eq!(round_currency(Decimal::new(-5, 3)), Decimal::new(-1, 2));
    }

    #[test]
    fn whole_amounts_are_untouched() {
        assert_eq!(round_currency(Decimal::new(2640, 0)), Decimal::new(2640, 0));
        assert_eq!(round_currency(Decimal::new(10049, 4)), Decimal::new(100, 2));
    }

    #[test]
    fn line_and_subtotal_arithmetic() {
        let seo = Decimal::new(300, 0).safe_mul(Decimal::new(6, 0)).unwrap();
        let smm = Decimal::new(200, 0).safe_mul(Decimal::new(3, 0)).unwrap();
        assert_eq!(seo.safe_add(smm).unwrap(), Decimal::new(2400, 0));
    }

    #[test]
    fn out_of_range_is_overflow() {
        assert_eq!(Decimal::MAX.safe_add(Decimal::ONE), Err(ArithmeticError::Overflow));
        assert_eq!(Decimal::MAX.safe_mul(Decimal::TWO), Err(ArithmeticError::Overflow));
    }
}
