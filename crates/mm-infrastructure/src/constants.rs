//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "micromonolith.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "micromonolith";

/// Environment variable prefix for configuration (`MM__SECTION__KEY`)
pub const CONFIG_ENV_PREFIX: &str = "MM__";

/// Separator between nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "MM_LOG";

/// Default log file stem when the configured path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "micromonolith";

// ============================================================================
// MODULE CONSTANTS
// ============================================================================

/// Default sender address of the notification module
pub const DEFAULT_NOTIFICATION_SENDER: &str = "noreply@micromonolith.local";

/// Default document size limit of the notification module (10 MiB)
pub const DEFAULT_MAX_DOCUMENT_BYTES: usize = 10 * 1024 * 1024;

/// Default user name
pub const DEFAULT_USER_NAME: &str = "Demo User";

/// Default user email
pub const DEFAULT_USER_EMAIL: &str = "demo.user@micromonolith.local";

/// Default provider module for the user module's `document_sender` slot
pub const DEFAULT_USER_DOCUMENT_SENDER: &str = "notification";
