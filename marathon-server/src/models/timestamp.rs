//! Timestamp parsing for request bodies
//!
//! Clients send either naive local timestamps (`2024-05-01T09:30:00`) or
//! JavaScript `toISOString()` output (`2024-05-01T09:30:00.000Z`). Values
//! with an offset are converted to UTC and stored without a zone, which is
//! what the `TIMESTAMP` columns hold. Use with `#[serde(deserialize_with)]`
//! next to `default`.

use std::fmt;

use chrono::{DateTime, NaiveDateTime};
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

use super::Patch;

/// Parse a naive or RFC 3339 timestamp.
pub fn parse(value: &str) -> Option<NaiveDateTime> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(value) {
        return Some(with_offset.naive_utc());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

struct ClientTimestamp(NaiveDateTime);

impl<'de> Deserialize<'de> for ClientTimestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TimestampVisitor;

        impl Visitor<'_> for TimestampVisitor {
            type Value = ClientTimestamp;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an ISO 8601 timestamp")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                parse(value)
                    .map(ClientTimestamp)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Str(value), &self))
            }
        }

        deserializer.deserialize_str(TimestampVisitor)
    }
}

/// Optional timestamp; `null` is `None`.
pub fn option<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<ClientTimestamp>::deserialize(deserializer)?.map(|ts| ts.0))
}

/// Timestamp inside a partial update.
pub fn patch<'de, D>(deserializer: D) -> Result<Patch<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<ClientTimestamp>::deserialize(deserializer)? {
        Some(ts) => Patch::Value(ts.0),
        None => Patch::Null,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32, ms: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_milli_opt(h, m, s, ms)
            .unwrap()
    }

    #[test]
    fn accepts_javascript_iso_strings() {
        assert_eq!(parse("2026-10-19T12:34:56.789Z"), Some(at(12, 34, 56, 789)));
    }

    #[test]
    fn offsets_are_normalized_to_utc() {
        assert_eq!(parse("2026-10-19T15:34:56+03:00"), Some(at(12, 34, 56, 0)));
    }

    #[test]
    fn naive_forms_are_kept_as_is() {
        assert_eq!(parse("2026-10-19T12:34:56"), Some(at(12, 34, 56, 0)));
        assert_eq!(parse("2026-10-19 12:34:56.5"), Some(at(12, 34, 56, 500)));
        assert_eq!(parse("2026-10-19T12:34"), Some(at(12, 34, 0, 0)));
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(parse("yesterday"), None);
        assert_eq!(parse("2026-10-19"), None);
    }

    #[derive(Deserialize)]
    struct Body {
        #[serde(default, deserialize_with = "option")]
        at: Option<NaiveDateTime>,
        #[serde(default, deserialize_with = "patch")]
        changed: Patch<NaiveDateTime>,
    }

    #[test]
    fn field_helpers_keep_absent_and_null_apart() {
        let body: Body = serde_json::from_str("{}").unwrap();
        assert_eq!(body.at, None);
        assert_eq!(body.changed, Patch::Missing);

        let body: Body =
            serde_json::from_str(r#"{"at": null, "changed": null}"#).unwrap();
        assert_eq!(body.at, None);
        assert_eq!(body.changed, Patch::Null);

        let body: Body = serde_json::from_str(
            r#"{"at": "2026-10-19T12:34:56.789Z", "changed": "2026-10-19T12:34:56.789Z"}"#,
        )
        .unwrap();
        assert_eq!(body.at, Some(at(12, 34, 56, 789)));
        assert_eq!(body.changed, Patch::Value(at(12, 34, 56, 789)));
    }

    #[test]
    fn field_helpers_reject_non_strings() {
        assert!(serde_json::from_str::<Body>(r#"{"at": 12}"#).is_err());
    }
}
