//! Serde helpers for values that arrive from HTML forms.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum FormNumber {
    Number(i64),
    Text(String),
}

/// Accepts `35`, `"35"` or `" 35 "`. Blank or non-numeric text decodes to
/// `None` so the field is reported as missing by validation.
pub fn optional_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<FormNumber>::deserialize(deserializer)? {
        Some(FormNumber::Number(value)) => Some(value),
        Some(FormNumber::Text(text)) => text.trim().parse().ok(),
        None => None,
    })
}
