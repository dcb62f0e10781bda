//! Configuration management
//!
//! [`AppConfig`] holds one section per concern. [`loader::ConfigLoader`]
//! merges defaults, an optional TOML file and `MM__` environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::*;
