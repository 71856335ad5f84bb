//! Environment variable configuration provider.

use super::{Getter, SharedGetter};
use std::env;
use std::sync::Arc;

/// Environment variable configuration provider.
///
/// Holds no state. Every read goes to the process environment at call time, so
/// values written into the environment by a loader are visible immediately.
///
/// # Examples
///
/// ```rust
/// use lazyconf::sources::{EnvGetter, Getter};
///
/// let env = EnvGetter::new();
/// let hosts = env.get_strings("LAZYCONF_DOC_UNSET_HOSTS");
/// assert_eq!(hosts, vec![String::new()]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvGetter;

impl EnvGetter {
    /// Create a new environment provider.
    pub fn new() -> Self {
        Self
    }
}

impl Getter for EnvGetter {
    /// Read `key` from the process environment, or `""` if it is unset.
    ///
    /// Values that are not valid Unicode are converted lossily.
    fn get(&self, key: &str) -> String {
        env::var_os(key)
            .map(|value| value.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Create a shared environment provider.
///
/// Convenient inside a loader that copies values into the environment and then
/// hands reads back to it.
pub fn environment() -> SharedGetter {
    Arc::new(EnvGetter::new())
}
