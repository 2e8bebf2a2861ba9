use serde::{Deserialize, Deserializer};

/// Deserializes an explicit JSON `null` as the type's default
///
/// Pair with `#[serde(default)]` so that absent and `null` fields behave the same.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
