//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns and the composition root.
//!
//! ## Module Categories
//!
//! ### Configuration & Wiring
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration: defaults, TOML file, `MM__` environment |
//! | [`di`] | Wiring plan validation and the composition root |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability & Errors
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context extension for foreign errors |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use di::{AppContext, WiringOrder, WiringPlan, init_app};
pub use error_ext::ErrorContext;
