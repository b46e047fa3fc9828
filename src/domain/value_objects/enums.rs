//! # Domain Enums
//!
//! Enumeration types for domain concepts.
//!
//! - [`BillingUnit`] - How a catalog entry is billed (once or per month)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Billing unit of a catalog entry.
///
/// # Examples
///
/// ```
/// use quote_leads::domain::value_objects::enums::BillingUnit;
///
/// assert_eq!(BillingUnit::Monthly.to_string(), "per month");
/// assert!(BillingUnit::Monthly.is_recurring());
/// assert_eq!("one-time".parse::<BillingUnit>().unwrap(), BillingUnit::OneTime);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BillingUnit {
    /// Billed once (e.g. a base project price).
    OneTime,
    /// Billed every month the service runs.
    Monthly,
}

impl BillingUnit {
    /// Returns true if the service is billed on a recurring basis.
    #[inline]
    #[must_use]
    pub const fn is_recurring(self) -> bool {
        matches!(self, Self::Monthly)
    }

    /// Returns the machine-readable code used on the wire.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::OneTime => "one-time",
            Self::Monthly => "monthly",
        }
    }
}

impl fmt::Display for BillingUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OneTime => write!(f, "one-time"),
            Self::Monthly => write!(f, "per month"),
        }
    }
}

/// Error returned when parsing an enum from an unknown string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {0} value: {1}")]
pub struct ParseEnumError(pub &'static str, pub String);

impl FromStr for BillingUnit {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "one-time" | "one_time" | "onetime" => Ok(Self::OneTime),
            "monthly" | "per month" | "per_month" => Ok(Self::Monthly),
            _ => Err(ParseEnumError("BillingUnit", s.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_labels() {
        assert_eq!("monthly".parse::<BillingUnit>().unwrap(), BillingUnit::Monthly);
        assert_eq!("Per Month".parse::<BillingUnit>().unwrap(), BillingUnit::Monthly);
        assert_eq!("one_time".parse::<BillingUnit>().unwrap(), BillingUnit::OneTime);
    }

    #[test]
    fn rejects_unknown_label() {
        let err = "weekly".parse::<BillingUnit>().unwrap_err();
        assert!(err.to_string().contains("weekly"));
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&BillingUnit::OneTime).unwrap();
        assert_eq!(json, "\"one-time\"");
        let back: BillingUnit = serde_json::from_str("\"monthly\"").unwrap();
        assert_eq!(back, BillingUnit::Monthly);
    }

    #[test]
    fn code_matches_serde_name() {
        for unit in [BillingUnit::OneTime, BillingUnit::Monthly] {
            let json = serde_json::to_string(&unit).unwrap();
            assert_eq!(json, format!("\"{}\"", unit.code()));
        }
    }
}
