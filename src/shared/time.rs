/**
 * Timestamp Parsing
 *
 * Event times arrive from browser clients in several ISO-8601 shapes:
 * full RFC 3339 (`2024-01-01T09:00:00+02:00`), minute precision with a `Z`
 * suffix or an offset (`2024-01-01T09:00Z`, `2024-01-01T09:00+02:00`), or
 * naive local strings without an offset.
 * All of them are normalised to UTC; naive values are taken as UTC.
 */

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{de, Deserialize, Deserializer};

use crate::shared::error::SharedError;
use crate::shared::patch::Patch;

const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%:z", "%Y-%m-%d %H:%M%:z"];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a client-supplied timestamp into UTC
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, SharedError> {
    let trimmed = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }

    if let Some(parsed) = OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(trimmed, format).ok())
    {
        return Ok(parsed.with_timezone(&Utc));
    }

    let naive = trimmed
        .strip_suffix('Z')
        .or_else(|| trimmed.strip_suffix('z'))
        .unwrap_or(trimmed);

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(naive, format).ok())
        .map(|parsed| parsed.and_utc())
        .ok_or_else(|| SharedError::invalid_timestamp(value))
}

/// Serde adapter for required timestamp fields
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(de::Error::custom)
}

/// Serde adapter for timestamp fields of a partial update
pub fn deserialize_patch<'de, D>(deserializer: D) -> Result<Patch<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Patch::<String>::deserialize(deserializer)? {
        Patch::Missing => Ok(Patch::Missing),
        Patch::Null => Ok(Patch::Null),
        Patch::Value(raw) => parse_timestamp(&raw)
            .map(Patch::Value)
            .map_err(de::Error::custom),
    }
}
