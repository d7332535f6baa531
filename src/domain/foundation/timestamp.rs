//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Immutable point in time, always UTC, with millisecond precision.
///
/// Serializes as Unix milliseconds so session records stay compact and
/// comparable across store backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>, truncated to milliseconds.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self::from_unix_millis(dt.timestamp_millis())
    }

    /// Creates a timestamp from Unix milliseconds.
    ///
    /// Out-of-range values clamp to the Unix epoch.
    pub fn from_unix_millis(millis: i64) -> Self {
        let dt = Utc
            .timestamp_millis_opt(millis)
            .single()
            .unwrap_or_default();
        Self(dt)
    }

    /// Returns the timestamp as Unix milliseconds.
    pub fn as_unix_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Returns the duration from another timestamp to this one.
    ///
    /// Returns negative duration if other is after self.
    pub fn duration_since(&self, other: &Timestamp) -> Duration {
        self.0.signed_duration_since(other.0)
    }

    /// Milliseconds elapsed from `earlier` to this timestamp.
    ///
    /// Negative when `earlier` is actually later (clock skew).
    pub fn millis_since(&self, earlier: &Timestamp) -> i64 {
        self.duration_since(earlier).num_milliseconds()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_unix_millis())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let millis = i64::deserialize(deserializer)?;
        Ok(Self::from_unix_millis(millis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now().timestamp_millis();
        let ts = Timestamp::now();
        let after = Utc::now().timestamp_millis();

        assert!(ts.as_unix_millis() >= before);
        assert!(ts.as_unix_millis() <= after);
    }

    #[test]
    fn timestamp_truncates_to_millis() {
        let dt = Utc.timestamp_opt(1_705_276_800, 123_456_789).unwrap();
        let ts = Timestamp::from_datetime(dt);
        assert_eq!(ts.as_unix_millis(), 1_705_276_800_123);
    }

    #[test]
    fn timestamp_ordering_works() {
        let ts1 = Timestamp::now();
        sleep(std::time::Duration::from_millis(10));
        let ts2 = Timestamp::now();

        assert!(ts1 < ts2);
    }

    #[test]
    fn timestamp_from_unix_millis_works() {
        // 2024-01-15T00:00:00Z
        let ts = Timestamp::from_unix_millis(1_705_276_800_000);
        assert_eq!(ts.as_unix_millis(), 1_705_276_800_000);
        assert_eq!(ts, Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap()));
    }

    #[test]
    fn millis_since_measures_elapsed_time() {
        let issued = Timestamp::from_unix_millis(1_000_000);
        let later = Timestamp::from_unix_millis(1_029_999);

        assert_eq!(later.millis_since(&issued), 29_999);
        assert_eq!(issued.millis_since(&later), -29_999);
    }

    #[test]
    fn timestamp_serializes_as_unix_millis() {
        let ts = Timestamp::from_unix_millis(1_705_276_800_042);
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "1705276800042");

        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ts);
    }
}
