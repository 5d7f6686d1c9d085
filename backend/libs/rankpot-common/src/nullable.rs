//! Serde helper for keys that must be present but may be `null`

use serde::{Deserialize, Deserializer};

/// Deserialize an `Option<T>` field without serde's implicit default
///
/// A missing key is an error; an explicit `null` becomes `None`.
pub fn required<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}
