//! Loader registration and default provider resolution.

mod global;
mod loader;
mod registry;

pub use global::{clear_loader, default, install, registry, set_loader};
pub use loader::{LoadContext, Loader};
pub use registry::Registry;
