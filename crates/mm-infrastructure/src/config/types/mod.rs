//! Configuration types module

pub mod app;
pub mod logging;
pub mod modules;

// Re-export main types
pub use app::AppConfig;
pub use logging::LoggingConfig;
pub use modules::{AddressConfig, NotificationConfig, UserConfig, WiringConfig};
