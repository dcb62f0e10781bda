//! Main application configuration

use super::logging::LoggingConfig;
use super::modules::{AddressConfig, NotificationConfig, UserConfig, WiringConfig};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Address module configuration
    #[serde(default)]
    pub address: AddressConfig,

    /// Notification module configuration
    #[serde(default)]
    pub notification: NotificationConfig,

    /// User module configuration
    #[serde(default)]
    pub user: UserConfig,

    /// Slot to provider bindings
    #[serde(default)]
    pub wiring: WiringConfig,
}
