//! Lenient deserializers for numeric fields the public forms submit as text.

use serde::de::Error;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(i64),
    Text(String),
}

impl NumberOrString {
    fn into_i64<E: Error>(self) -> Result<i64, E> {
        match self {
            Self::Number(n) => Ok(n),
            Self::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("invalid integer '{s}'"))),
        }
    }
}

/// Accept `3` or `"3"`.
pub fn i32_lenient<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = NumberOrString::deserialize(deserializer)?.into_i64()?;
    i32::try_from(value).map_err(|_| D::Error::custom(format!("integer {value} out of range")))
}

/// Accept `7`, `"7"`, `null`, or `""` (treated as absent).
///
/// Pair with `#[serde(default)]` so a missing field is also `None`.
pub fn opt_i64_lenient<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(value) => value.into_i64().map(Some),
    }
}
