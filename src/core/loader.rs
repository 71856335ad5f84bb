//! Loader callbacks that construct the default provider.

use crate::sources::SharedGetter;
use std::fmt;
use std::sync::Arc;

/// Request-scoped context handed to a [`Loader`].
///
/// Reserved for per-request configuration. Loaders currently always receive
/// `None`.
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct LoadContext {}

/// Type alias for loader functions.
type LoaderFn = dyn Fn(Option<&LoadContext>) -> SharedGetter + Send + Sync;

/// Deferred construction of the default configuration provider.
///
/// A loader can write values into the environment and return
/// [`environment()`](crate::sources::environment), or return any other
/// [`Getter`](crate::sources::Getter). It runs on the first resolution after it
/// is installed, not when it is installed.
#[derive(Clone)]
pub struct Loader {
    load: Arc<LoaderFn>,
}

impl Loader {
    /// Wrap a loader function.
    pub fn new<F>(load: F) -> Self
    where
        F: Fn(Option<&LoadContext>) -> SharedGetter + Send + Sync + 'static,
    {
        Self {
            load: Arc::new(load),
        }
    }

    /// Run the loader.
    pub fn load(&self, ctx: Option<&LoadContext>) -> SharedGetter {
        (self.load)(ctx)
    }
}

impl fmt::Debug for Loader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Loader").finish_non_exhaustive()
    }
}
