//! Lenient field decoders.
//!
//! Form inputs reach the server as strings, so numeric-looking fields may come
//! back either as JSON numbers or as numeric strings, and unset text fields
//! come back as `null`. Use these with `#[serde(deserialize_with = "...")]`.

use serde::{Deserialize, Deserializer, de::Error};
use serde_json::Value;
use std::{fmt::Display, str::FromStr};

#[derive(Deserialize)]
#[serde(untagged)]
enum Raw {
    Number(u64),
    Text(String),
    Other(Value),
}

/// Deserializes a text field, reading `null` as the empty string
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parses a trimmed numeric string, returning `None` for blank or non-numeric input
pub fn parse_digits<T: FromStr>(s: &str) -> Option<T> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }

    trimmed.parse().ok()
}

/// Deserializes a required integer from a number or a numeric string
pub fn integer<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64> + FromStr,
    <T as TryFrom<u64>>::Error: Display,
    <T as FromStr>::Err: Display,
{
    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => T::try_from(n).map_err(D::Error::custom),
        Raw::Text(s) => s
            .trim()
            .parse()
            .map_err(|e| D::Error::custom(format!("invalid integer '{s}': {e}"))),
        Raw::Other(value) => Err(D::Error::custom(format!(
            "expected a non-negative integer, got {value}"
        ))),
    }
}

/// Deserializes an optional integer; null, blank and non-numeric values become `None`
///
/// Floats and negative numbers count as non-numeric.
pub fn optional_integer<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64> + FromStr,
{
    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None => None,
        Some(Raw::Number(n)) => T::try_from(n).ok(),
        Some(Raw::Text(s)) => parse_digits(&s),
        Some(Raw::Other(_)) => None,
    })
}
