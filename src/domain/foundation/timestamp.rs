//! Timestamp value object for immutable points in time.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// Checks if this timestamp is after another.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }

    /// Creates a new timestamp by adding the specified number of seconds.
    ///
    /// Saturates at the latest representable instant.
    pub fn plus_secs(&self, secs: u64) -> Self {
        let shifted = delta_secs(secs).and_then(|delta| self.0.checked_add_signed(delta));
        Self(shifted.unwrap_or(DateTime::<Utc>::MAX_UTC))
    }

    /// Creates a new timestamp by subtracting the specified number of seconds.
    ///
    /// Saturates at the earliest representable instant.
    pub fn minus_secs(&self, secs: u64) -> Self {
        let shifted = delta_secs(secs).and_then(|delta| self.0.checked_sub_signed(delta));
        Self(shifted.unwrap_or(DateTime::<Utc>::MIN_UTC))
    }

    /// Creates a timestamp from Unix seconds, if representable.
    pub fn from_unix_secs(secs: i64) -> Option<Self> {
        Utc.timestamp_opt(secs, 0).single().map(Self)
    }

    /// Returns the timestamp as Unix seconds.
    pub fn as_unix_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// True once `now` has reached or passed this instant.
    ///
    /// Used for OTP and reset-token expiry.
    pub fn has_passed(&self, now: &Timestamp) -> bool {
        !now.is_before(self)
    }
}

fn delta_secs(secs: u64) -> Option<TimeDelta> {
    i64::try_from(secs).ok().and_then(TimeDelta::try_seconds)
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}
