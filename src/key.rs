//! Canonical string identities for cache keys.
//!
//! Every key is reduced to a string before it reaches the index. Primitive
//! keys use their plain textual form. Structured keys are rendered as compact
//! JSON with a stable field order.
//!
//! Two keys with the same canonical string are the same key, whatever their
//! original type: `7u8`, `7i64`, `"7"` and `StructuredKey::new(&7)` all address
//! one entry. Keys of different shapes can therefore collide, for example the
//! string `"[1,2]"` and the structured key `[1, 2]`. Keep the key domain of a
//! given cache uniform if that matters.

use serde::Serialize;
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;

use crate::error::{CacheError, CacheResult};

/// A type that can be used to address cache entries.
pub trait CacheKey {
    /// The canonical string identity of this key.
    fn canonical_key(&self) -> Cow<'_, str>;
}

impl CacheKey for str {
    fn canonical_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl CacheKey for String {
    fn canonical_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl CacheKey for Cow<'_, str> {
    fn canonical_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_ref())
    }
}

impl<K: CacheKey + ?Sized> CacheKey for &K {
    fn canonical_key(&self) -> Cow<'_, str> {
        (**self).canonical_key()
    }
}

macro_rules! display_key {
    ($($ty:ty),* $(,)?) => {
        $(
            impl CacheKey for $ty {
                fn canonical_key(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

display_key!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
);

/// A key built from any serializable value.
///
/// The value is converted to JSON once, at construction, so lookups with a
/// `StructuredKey` never fail. Map keys are sorted and struct fields keep
/// their declaration order, which makes the encoding deterministic.
///
/// ```
/// use lru_ttl_cache::{CacheKey, StructuredKey};
/// use std::collections::HashMap;
///
/// let mut query = HashMap::new();
/// query.insert("page", 2);
/// query.insert("limit", 10);
///
/// let key = StructuredKey::new(&query).unwrap();
/// assert_eq!(key.canonical_key(), r#"{"limit":10,"page":2}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StructuredKey(String);

impl StructuredKey {
    /// Encode `key` into its canonical form.
    ///
    /// Strings, numbers and booleans encode exactly like the matching
    /// primitive key. Everything else becomes compact JSON.
    pub fn new<T: Serialize + ?Sized>(key: &T) -> CacheResult<Self> {
        let value = serde_json::to_value(key).map_err(CacheError::KeyEncoding)?;
        let encoded = match value {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            other => other.to_string(),
        };
        Ok(Self(encoded))
    }

    /// The canonical string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl CacheKey for StructuredKey {
    fn canonical_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.0)
    }
}

impl fmt::Display for StructuredKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
