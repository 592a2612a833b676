use serde::{Deserialize, Deserializer};

/// Decodes a string field where an explicit `null` means the same as unset.
pub fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
