//! ISO-8601 date handling for content records
//!
//! Data files carry dates as strings in a few shapes (`2024-06-01`,
//! `2024-06-01T18:30`, `2024-06-01T18:30:00+02:00`). They are normalized to
//! UTC once, at load time, so that every comparison afterwards is a plain
//! instant comparison.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

use crate::error::ContentError;

/// Parse an ISO-8601 date or date-time string into a UTC instant
///
/// Date-only values and date-times without an offset are taken as UTC.
pub fn parse_iso(value: &str) -> Result<DateTime<Utc>, ContentError> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, fmt) {
            return Ok(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| ContentError::InvalidDate(value.to_string()))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_iso(&raw).map_err(serde::de::Error::custom)
}

pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.to_rfc3339())
}
