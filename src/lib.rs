//! # lazyconf
//!
//! Loosely coupled runtime configuration with a lazily resolved, swappable
//! default provider.
//!
//! ## Overview
//!
//! Application code reads configuration through the [`Getter`](sources::Getter)
//! trait and never binds to where values come from:
//! - [`default()`] returns the process-wide provider, resolved once and cached
//! - Out of the box that provider reads process environment variables
//! - [`set_loader()`] swaps in a different source (a remote service, a file,
//!   a bootstrap step that populates the environment) before consumers start
//!
//! ## Quick Start
//!
//! ```rust
//! use lazyconf::prelude::*;
//! use std::sync::Arc;
//!
//! // Early in main: choose where configuration comes from.
//! lazyconf::set_loader(|_ctx| {
//!     Arc::new(MapGetter::new().with("LISTEN_ADDRS", "0.0.0.0:80, [::]:80"))
//! });
//!
//! // Anywhere else: read it.
//! let config = lazyconf::default();
//! assert_eq!(
//!     config.get_strings("LISTEN_ADDRS"),
//!     vec!["0.0.0.0:80", "[::]:80"]
//! );
//! assert_eq!(config.get_or_default("LOG_LEVEL", "info"), "info");
//! ```
//!
//! ## Failure modes
//!
//! Missing values are not errors for [`get`](sources::Getter::get),
//! [`get_or_default`](sources::Getter::get_or_default) and
//! [`get_strings`](sources::Getter::get_strings).
//! [`try_get`](sources::Getter::try_get) reports them as
//! [`ConfigError::MissingKey`](error::ConfigError::MissingKey), while
//! [`must_get`](sources::Getter::must_get) panics, for values the process cannot
//! start without.

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod sources;

pub use crate::core::{clear_loader, default, install, registry, set_loader};
pub use crate::sources::environment;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::core::{clear_loader, default, install, registry, set_loader};
    pub use crate::core::{LoadContext, Loader, Registry};
    pub use crate::error::{ConfigError, Result};
    pub use crate::sources::{EnvGetter, Getter, MapGetter, SharedGetter, environment};
}
