//! Configuration provider implementations.

mod env;
mod getter;
mod map;

pub use env::{EnvGetter, environment};
pub use getter::{Getter, SharedGetter};
pub use map::MapGetter;
