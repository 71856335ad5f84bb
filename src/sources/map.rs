//! In-memory configuration provider.

use super::Getter;
use std::collections::HashMap;

/// Configuration provider backed by an in-memory map.
///
/// Useful for loaders that fetch values from somewhere other than the process
/// environment, and for tests that should not touch the environment at all.
///
/// # Examples
///
/// ```rust
/// use lazyconf::sources::{Getter, MapGetter};
///
/// let config = MapGetter::new()
///     .with("REGION", "eu-west-1")
///     .with("ZONES", "a, b");
///
/// assert_eq!(config.get("REGION"), "eu-west-1");
/// assert_eq!(config.get_strings("ZONES"), vec!["a", "b"]);
/// assert_eq!(config.get_or_default("MISSING", "none"), "none");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapGetter {
    values: HashMap<String, String>,
}

impl MapGetter {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, replacing any previous value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set `key` to `value` in place, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(key.into(), value.into())
    }

    /// Number of keys held.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no keys are held.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Getter for MapGetter {
    fn get(&self, key: &str) -> String {
        self.values.get(key).cloned().unwrap_or_default()
    }
}

impl<K, V> FromIterator<(K, V)> for MapGetter
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
