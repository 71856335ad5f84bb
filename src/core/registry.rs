//! Lazily resolved, swappable default configuration provider.

use crate::core::{LoadContext, Loader};
use crate::sources::{EnvGetter, SharedGetter};
use arc_swap::ArcSwapOption;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Where a resolved provider came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    Loader,
    Environment,
}

/// A provider produced by resolution, cached until the next install.
struct Resolved {
    getter: SharedGetter,
    origin: Origin,
}

/// Holder of the installed [`Loader`] and the provider it resolved to.
///
/// The first call to [`default_getter`](Registry::default_getter) after an
/// install runs the loader (or falls back to the environment) and caches the
/// result. Later calls return the cached provider with a single lock-free load.
/// Installing a loader clears the cache before returning, so the same thread
/// always observes the new loader on its next resolution.
///
/// Most applications use the process-wide instance through the crate-level
/// functions ([`set_loader`](crate::set_loader), [`default`](crate::default));
/// a standalone `Registry` is handy for tests and for embedding.
///
/// # Examples
///
/// ```rust
/// use lazyconf::core::Registry;
/// use lazyconf::sources::{Getter, MapGetter};
/// use std::sync::Arc;
///
/// let registry = Registry::new();
/// registry.set_loader(|_ctx| Arc::new(MapGetter::new().with("MODE", "test")));
///
/// let config = registry.default_getter();
/// assert_eq!(config.get("MODE"), "test");
///
/// // Cached until the next install.
/// assert!(Arc::ptr_eq(&config, &registry.default_getter()));
/// ```
pub struct Registry {
    /// The installed loader, `None` for the environment fallback
    loader: ArcSwapOption<Loader>,
    /// Serializes first-time resolution
    load_lock: Mutex<()>,
    /// The resolved provider, `None` until resolved since the last install
    resolved: ArcSwapOption<Resolved>,
}

impl Registry {
    /// Create a registry with no loader installed and nothing resolved.
    pub const fn new() -> Self {
        Self {
            loader: ArcSwapOption::const_empty(),
            load_lock: Mutex::new(()),
            resolved: ArcSwapOption::const_empty(),
        }
    }

    /// Install `load` as the loader for the default provider.
    ///
    /// Shorthand for `install(Some(Loader::new(load)))`.
    pub fn set_loader<F>(&self, load: F)
    where
        F: Fn(Option<&LoadContext>) -> SharedGetter + Send + Sync + 'static,
    {
        self.install(Some(Loader::new(load)));
    }

    /// Replace the installed loader and clear the resolved provider.
    ///
    /// The loader is not run here; it runs on the next resolution. Passing
    /// `None` restores the environment fallback. The last install wins.
    ///
    /// Waits for a resolution that is already running, so its result cannot
    /// outlive this install. Calling it from inside a loader deadlocks.
    pub fn install(&self, loader: Option<Loader>) {
        tracing::debug!(custom = loader.is_some(), "installing configuration loader");
        let _guard = self.load_lock.lock();
        self.loader.store(loader.map(Arc::new));
        self.resolved.store(None);
    }

    /// Remove any installed loader so the environment is used again.
    pub fn clear_loader(&self) {
        self.install(None);
    }

    /// Get the default configuration provider, resolving it if needed.
    ///
    /// Concurrent first calls run the loader at most once and all receive the
    /// same provider.
    ///
    /// # Panics
    ///
    /// A panic raised by the loader propagates to the caller. Nothing is cached
    /// in that case, so the next call runs the loader again.
    pub fn default_getter(&self) -> SharedGetter {
        if let Some(resolved) = &*self.resolved.load() {
            return Arc::clone(&resolved.getter);
        }

        let _guard = self.load_lock.lock();

        // Another thread may have resolved while we waited for the lock.
        if let Some(resolved) = &*self.resolved.load() {
            return Arc::clone(&resolved.getter);
        }

        let resolved = match self.loader.load_full() {
            Some(loader) => Resolved {
                getter: loader.load(None),
                origin: Origin::Loader,
            },
            None => Resolved {
                getter: Arc::new(EnvGetter::new()),
                origin: Origin::Environment,
            },
        };
        tracing::debug!(origin = ?resolved.origin, "resolved default configuration");

        let getter = Arc::clone(&resolved.getter);
        self.resolved.store(Some(Arc::new(resolved)));
        getter
    }

    /// Whether a loader is installed.
    pub fn has_loader(&self) -> bool {
        self.loader.load().is_some()
    }

    /// Whether the default provider has been resolved since the last install.
    pub fn is_resolved(&self) -> bool {
        self.resolved.load().is_some()
    }

    fn origin(&self) -> Option<Origin> {
        let resolved = self.resolved.load();
        (*resolved).as_ref().map(|resolved| resolved.origin)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("has_loader", &self.has_loader())
            .field("origin", &self.origin())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::MapGetter;
    use std::panic::{self, AssertUnwindSafe};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_loader(calls: &Arc<AtomicUsize>, value: &'static str) -> Loader {
        let calls = Arc::clone(calls);
        Loader::new(move |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            Arc::new(MapGetter::new().with("VALUE", value))
        })
    }

    #[test]
    fn test_new_is_unresolved() {
        let registry = Registry::new();
        assert!(!registry.has_loader());
        assert!(!registry.is_resolved());
    }

    #[test]
    fn test_environment_fallback() {
        let registry = Registry::new();
        let config = registry.default_getter();

        assert!(registry.is_resolved());
        assert_eq!(config.get("LAZYCONF_UNIT_REGISTRY_UNSET"), "");
        assert_eq!(registry.origin(), Some(Origin::Environment));
    }

    #[test]
    fn test_loader_runs_lazily_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let registry = Registry::new();
        registry.install(Some(counting_loader(&calls, "one")));

        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let first = registry.default_getter();
        let second = registry.default_getter();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.get("VALUE"), "one");
    }

    #[test]
    fn test_install_invalidates_cache() {
        let first_calls = Arc::new(AtomicUsize::new(0));
        let second_calls = Arc::new(AtomicUsize::new(0));
        let registry = Registry::new();

        registry.install(Some(counting_loader(&first_calls, "one")));
        let first = registry.default_getter();

        registry.install(Some(counting_loader(&second_calls, "two")));
        assert!(!registry.is_resolved());
        let second = registry.default_getter();

        assert_eq!(first_calls.load(Ordering::SeqCst), 1);
        assert_eq!(second_calls.load(Ordering::SeqCst), 1);
        assert_eq!(second.get("VALUE"), "two");
        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_reinstalling_same_loader_reruns_it() {
        let calls = Arc::new(AtomicUsize::new(0));
        let loader = counting_loader(&calls, "same");
        let registry = Registry::new();

        registry.install(Some(loader.clone()));
        registry.default_getter();
        registry.install(Some(loader));
        registry.default_getter();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_clear_loader_falls_back_to_environment() {
        let registry = Registry::new();
        registry.set_loader(|_| Arc::new(MapGetter::new().with("VALUE", "custom")));
        assert_eq!(registry.default_getter().get("VALUE"), "custom");

        registry.clear_loader();
        assert!(!registry.has_loader());
        assert_eq!(registry.default_getter().get("LAZYCONF_UNIT_REGISTRY_UNSET"), "");
        assert_eq!(registry.origin(), Some(Origin::Environment));
    }

    #[test]
    fn test_panicking_loader_is_retried() {
        let calls = Arc::new(AtomicUsize::new(0));
        let registry = Registry::new();
        {
            let calls = Arc::clone(&calls);
            registry.set_loader(move |_| {
                if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                    panic!("config backend unavailable");
                }
                Arc::new(MapGetter::new().with("VALUE", "recovered"))
            });
        }

        let result = panic::catch_unwind(AssertUnwindSafe(|| registry.default_getter()));
        assert!(result.is_err());
        assert!(!registry.is_resolved());

        assert_eq!(registry.default_getter().get("VALUE"), "recovered");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_loader_receives_no_context() {
        let registry = Registry::new();
        registry.set_loader(|ctx| {
            let value = if ctx.is_none() { "none" } else { "some" };
            Arc::new(MapGetter::new().with("CTX", value))
        });

        assert_eq!(registry.default_getter().get("CTX"), "none");
    }

    #[test]
    fn test_debug_output() {
        let registry = Registry::new();
        assert_eq!(
            format!("{registry:?}"),
            "Registry { has_loader: false, origin: None }"
        );
    }
}
