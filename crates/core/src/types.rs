use chrono::{Duration, SubsecRound};

/// Entity identifiers are opaque UUID v4 strings.
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Wire and storage format for timestamps (ISO-8601, microseconds, no offset).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Generate a fresh entity id.
pub fn new_id() -> EntityId {
    uuid::Uuid::new_v4().to_string()
}

/// Current time truncated to microseconds.
///
/// Both backends store microsecond precision, so anything finer would not
/// survive a save/reload cycle.
pub fn now() -> Timestamp {
    chrono::Utc::now().trunc_subsecs(6)
}

/// Next `updated_at` value for an entity last touched at `previous`.
///
/// Always strictly greater than `previous`, even when the clock has not
/// advanced a full microsecond.
pub fn touched_after(previous: Timestamp) -> Timestamp {
    let now = now();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}

/// Serde adapter for [`Timestamp`] fields using [`TIMESTAMP_FORMAT`].
///
/// Deserialization also accepts RFC 3339 strings with an explicit offset.
pub mod timestamp_format {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{Timestamp, TIMESTAMP_FORMAT};

    pub fn serialize<S: Serializer>(value: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Timestamp, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(serde::de::Error::custom)
    }

    pub fn parse(raw: &str) -> Result<Timestamp, chrono::ParseError> {
        match NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT) {
            Ok(naive) => Ok(naive.and_utc()),
            Err(_) => DateTime::parse_from_rfc3339(raw).map(|dt| dt.with_timezone(&Utc)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_uuid_strings() {
        let a = new_id();
        let b = new_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
    }

    #[test]
    fn touched_after_is_strictly_increasing() {
        let future = now() + Duration::seconds(10);
        assert!(touched_after(future) > future);

        let past = now() - Duration::seconds(10);
        assert!(touched_after(past) > past);
    }

    #[test]
    fn timestamp_format_keeps_microseconds() {
        let ts = timestamp_format::parse("2017-09-28T21:03:54.052298").unwrap();
        assert_eq!(
            ts.format(TIMESTAMP_FORMAT).to_string(),
            "2017-09-28T21:03:54.052298"
        );
    }

    #[test]
    fn timestamp_format_accepts_rfc3339() {
        let ts = timestamp_format::parse("2017-09-28T21:03:54.052298+00:00").unwrap();
        assert_eq!(
            ts.format(TIMESTAMP_FORMAT).to_string(),
            "2017-09-28T21:03:54.052298"
        );
    }
}
