//! Lenient deserialization of principal and authority names in configuration.
//!
//! Environment overrides and unquoted YAML turn a name such as `1001` into a
//! number before it reaches the config struct. These helpers accept any
//! scalar and keep its textual form.
//!
//! ```ignore
//! #[serde(deserialize_with = "surrogate_security::scalar::string")]
//! pub system_principal: String,
//! ```

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Bool(bool),
}

impl From<Scalar> for String {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Text(s) => s,
            Scalar::Unsigned(n) => n.to_string(),
            Scalar::Signed(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

/// A single name given as a string, number or boolean.
///
/// # Errors
///
/// Fails for maps, sequences and nulls.
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Scalar::deserialize(deserializer).map(String::from)
}

/// A list of names, each given as a string, number or boolean.
///
/// # Errors
///
/// Fails when the value is not a sequence of scalars.
pub fn strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Vec::<Scalar>::deserialize(deserializer)?;
    Ok(items.into_iter().map(String::from).collect())
}
