//! # Timestamp Value Object
//!
//! Server-assigned creation time of a lead.
//!
//! Leads are stored with millisecond precision, so [`Timestamp::now`]
//! truncates to whole milliseconds and a stored value reads back equal.
//! The wire format is RFC 3339 with milliseconds and a `Z` suffix.
//!
//! # Examples
//!
//! ```
//! use quote_leads::domain::value_objects::timestamp::Timestamp;
//!
//! let created = Timestamp::from_millis(1704067200000).unwrap();
//! assert_eq!(created.to_iso8601(), "2024-01-01T00:00:00.000Z");
//! assert!(created < Timestamp::now());
//! ```

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A UTC instant with millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Current time, truncated to milliseconds.
    #[must_use]
    pub fn now() -> Self {
        let now = Utc::now();
        Self::from_millis(now.timestamp_millis()).unwrap_or(Self(now))
    }

    /// Creates a timestamp from Unix milliseconds, `None` if out of range.
    #[must_use]
    pub fn from_millis(millis: i64) -> Option<Self> {
        Utc.timestamp_millis_opt(millis).single().map(Self)
    }

    /// Unix milliseconds, the storage representation.
    #[inline]
    #[must_use]
    pub fn timestamp_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// RFC 3339 with milliseconds, e.g. `2024-01-01T00:00:00.000Z`.
    #[must_use]
    pub fn to_iso8601(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn now_survives_millisecond_storage() {
        let ts = Timestamp::now();
        assert_eq!(Timestamp::from_millis(ts.timestamp_millis()), Some(ts));
    }

    #[test]
    fn keeps_sub_second_part() {
        let ts = Timestamp::from_millis(1704067200123).unwrap();
        assert_eq!(ts.timestamp_millis(), 1704067200123);
        assert_eq!(ts.to_iso8601(), "2024-01-01T00:00:00.123Z");
    }

    #[test]
    fn out_of_range_millis() {
        assert!(Timestamp::from_millis(i64::MAX).is_none());
    }

    #[test]
    fn display_matches_wire_format() {
        let ts = Timestamp::from_millis(0).unwrap();
        assert_eq!(ts.to_string(), "1970-01-01T00:00:00.000Z");
    }

    #[test]
    fn serde_roundtrip() {
        let ts = Timestamp::from_millis(1704067200000).unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(ts, back);
    }
}
