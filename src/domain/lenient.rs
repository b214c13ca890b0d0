//! Tolerant field decoders for records owned by the Listings API.
//!
//! Records are opaque: a field with an unexpected shape degrades to its
//! fallback instead of failing the whole response.

use chrono::{DateTime, NaiveDate, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose<T> {
    Value(T),
    Text(String),
    Other(IgnoredAny),
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn to_count(value: f64) -> Option<u32> {
    (value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX))
        .then_some(value as u32)
}

fn decode_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Loose::<f64>::deserialize(deserializer)? {
        Loose::Value(value) => Some(value).filter(|v| v.is_finite()),
        Loose::Text(raw) => parse_number(&raw),
        Loose::Other(_) => None,
    })
}

/// Number, numeric string or anything else; the latter reads as `0`.
pub fn number_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(decode_number(deserializer)?.unwrap_or(0.0))
}

/// Like [`number_or_zero`], but keeps "absent" distinguishable.
pub fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    decode_number(deserializer)
}

/// Non-negative whole number; fractions, negatives and junk are dropped.
pub fn optional_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(decode_number(deserializer)?.and_then(to_count))
}

/// RFC 3339 timestamp or a bare `YYYY-MM-DD` date (midnight UTC).
pub fn optional_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match Loose::<String>::deserialize(deserializer)? {
        Loose::Value(raw) | Loose::Text(raw) => raw,
        Loose::Other(_) => return Ok(None),
    };
    let raw = raw.trim();

    Ok(DateTime::parse_from_rfc3339(raw)
        .map(|d| d.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|d| d.and_utc())
        }))
}
