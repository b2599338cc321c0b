//! Serde helpers shared by the catalog and ranking documents.
//!
//! The catalog service is loose about scalar types: category ids and ranks
//! show up as JSON numbers in some tiers and as strings in others.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Scalar::Text(s) => s,
            Scalar::Integer(n) => n.to_string(),
            Scalar::Float(f) => f.to_string(),
        }
    }
}

/// Accept a string or a number, yielding its string form
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Scalar::deserialize(deserializer)?.into_string())
}

/// Like `string_or_number`, but `null` and a missing field become `None`
pub fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(Scalar::into_string))
}

/// Accept a non-negative integer written as a number or a numeric string
pub fn u32_or_string<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Scalar::deserialize(deserializer)?.into_string();
    raw.trim()
        .parse::<u32>()
        .map_err(|_| serde::de::Error::custom(format!("expected a rank, found {:?}", raw)))
}
