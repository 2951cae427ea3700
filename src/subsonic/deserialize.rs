//! Serde helpers that absorb the shape quirks of Subsonic responses.
//!
//! The API derives its JSON from an XML document, so an element that occurs
//! once is sent as an object, several occurrences as an array and none at all
//! as a missing key. Numeric attributes may arrive either as JSON numbers or as
//! decimal strings depending on the server implementation.

use serde::de::{DeserializeOwned, Error};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::models::CoverArtId;

/// Deserialize a field that may be absent, null, a single record or a list of
/// records into an ordered list.
pub fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;

    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(D::Error::custom))
            .collect(),
        single => serde_json::from_value(single)
            .map(|record| vec![record])
            .map_err(D::Error::custom),
    }
}

fn value_to_i64<E: Error>(value: &Value) -> Result<i64, E> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| E::custom(format!("identifier {} is not an integer", n))),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| E::custom(format!("invalid literal for integer identifier: '{}'", s))),
        other => Err(E::custom(format!("unexpected identifier value: {}", other))),
    }
}

/// Identifier sent as a decimal string or number, stored as an integer
pub fn int_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    value_to_i64(&value)
}

/// Optional variant of [`int_id`]; null is treated like an absent field
pub fn opt_int_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(None),
        other => value_to_i64(&other).map(Some),
    }
}

fn lenient_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().map(|f| f.max(0.0) as u64)),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
}

/// Metadata number (year, duration, counts). Unparseable values are dropped.
pub fn opt_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(lenient_u64(&value))
}

pub fn opt_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(lenient_u64(&value).and_then(|n| u32::try_from(n).ok()))
}

/// Cover art ids are opaque tokens: "42", 42 and "al-42" are all valid
pub fn opt_cover_art<'de, D>(deserializer: D) -> Result<Option<CoverArtId>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(None),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => Ok(Some(CoverArtId(s))),
        Value::Number(n) => Ok(Some(CoverArtId(n.to_string()))),
        other => Err(D::Error::custom(format!("unexpected cover art value: {}", other))),
    }
}

/// Boolean that some servers send as "true"/"false" strings
pub fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => b,
        Value::String(s) => s.eq_ignore_ascii_case("true"),
        Value::Number(n) => n.as_i64().map_or(false, |v| v != 0),
        _ => false,
    })
}
