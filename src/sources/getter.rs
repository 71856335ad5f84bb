//! Configuration provider trait.

use crate::error::{ConfigError, Result};
use std::sync::Arc;

/// Shared handle to a configuration provider.
///
/// This is what the registry hands out. Every caller that resolves the default
/// provider between two loader installs receives a clone of the same `Arc`.
pub type SharedGetter = Arc<dyn Getter>;

/// Trait for configuration providers.
///
/// Only [`get`](Getter::get) is required. The remaining operations are provided
/// in terms of `get`, so an implementation that overrides `get` alone (or wraps
/// another provider and overrides a single method) stays consistent across the
/// whole contract.
///
/// # Examples
///
/// ```rust
/// use lazyconf::sources::Getter;
///
/// /// Echoes the key back, lowercased.
/// struct Echo;
///
/// impl Getter for Echo {
///     fn get(&self, key: &str) -> String {
///         key.to_lowercase()
///     }
///
///     // Everything else is left to the provided methods, which call `get` above.
/// }
///
/// assert_eq!(Echo.get("HELLO"), "hello");
/// assert_eq!(Echo.get_strings("A,B"), vec!["a", "b"]);
/// ```
pub trait Getter: Send + Sync {
    /// Get the value for `key`, or an empty string if it is absent.
    fn get(&self, key: &str) -> String;

    /// Get the value for `key`, or `fallback` if it is absent or empty.
    fn get_or_default(&self, key: &str, fallback: &str) -> String {
        let value = self.get(key);
        if value.is_empty() {
            return fallback.to_string();
        }
        value
    }

    /// Treat the value for `key` as a comma-separated list.
    ///
    /// Whitespace around each element is trimmed and order is preserved. An
    /// absent key yields a single empty element, not an empty list.
    fn get_strings(&self, key: &str) -> Vec<String> {
        self.get(key)
            .split(',')
            .map(|item| item.trim().to_string())
            .collect()
    }

    /// Get the value for `key`, or a [`ConfigError::MissingKey`] if it is absent
    /// or empty.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingKey` naming `key` when no value is set.
    fn try_get(&self, key: &str) -> Result<String> {
        let value = self.get(key);
        if value.is_empty() {
            return Err(ConfigError::missing_key(key));
        }
        Ok(value)
    }

    /// Get the value for `key`, panicking if it is absent or empty.
    ///
    /// Use this only for values the process cannot run without. For a
    /// recoverable lookup use [`try_get`](Getter::try_get).
    ///
    /// # Panics
    ///
    /// Panics with a message naming `key` when no value is set.
    fn must_get(&self, key: &str) -> String {
        match self.try_get(key) {
            Ok(value) => value,
            Err(err) => {
                tracing::error!(key, "required configuration value is missing");
                panic!("{err}");
            }
        }
    }
}
