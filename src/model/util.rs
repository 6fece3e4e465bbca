use serde::{Deserialize, Deserializer};

/// Deserializes a field that is present in the body, keeping an explicit `null` as
/// `Some(None)`
///
/// Pair with `#[serde(default)]` so an absent field stays `None`.
pub fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
