//! The process-wide registry.

use crate::core::{LoadContext, Loader, Registry};
use crate::sources::SharedGetter;

static REGISTRY: Registry = Registry::new();

/// The process-wide [`Registry`] behind the crate-level functions.
pub fn registry() -> &'static Registry {
    &REGISTRY
}

/// Install a loader for the process-wide default provider.
///
/// The loader runs on the first call to [`default`] after this one, and every
/// call clears the previously resolved provider. Call it early, as close to the
/// application's entry point as possible, so that consumers see the right
/// configuration while they initialize. If it is never called, [`default`]
/// reads the environment.
///
/// # Examples
///
/// A loader that copies values into the environment and then reads from it:
///
/// ```rust
/// use lazyconf::prelude::*;
///
/// lazyconf::set_loader(|_ctx| {
///     unsafe {
///         std::env::set_var("MY_SPECIAL_CONFIG", "happy");
///     }
///     lazyconf::environment()
/// });
///
/// let config = lazyconf::default();
/// assert_eq!(config.get("MY_SPECIAL_CONFIG"), "happy");
/// ```
pub fn set_loader<F>(load: F)
where
    F: Fn(Option<&LoadContext>) -> SharedGetter + Send + Sync + 'static,
{
    REGISTRY.set_loader(load);
}

/// Replace the process-wide loader; `None` restores the environment fallback.
pub fn install(loader: Option<Loader>) {
    REGISTRY.install(loader);
}

/// Remove the process-wide loader.
pub fn clear_loader() {
    REGISTRY.clear_loader();
}

/// Get the process-wide default configuration provider.
///
/// See [`Registry::default_getter`].
pub fn default() -> SharedGetter {
    REGISTRY.default_getter()
}
