//! Module configuration types

use crate::constants::{
    DEFAULT_MAX_DOCUMENT_BYTES, DEFAULT_NOTIFICATION_SENDER, DEFAULT_USER_DOCUMENT_SENDER,
    DEFAULT_USER_EMAIL, DEFAULT_USER_NAME,
};
use mm_domain::value_objects::{Address, UserProfile};
use serde::{Deserialize, Serialize};

/// Address module configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressConfig {
    /// Addresses the module answers lookups from
    pub directory: Vec<Address>,
}

/// Notification module configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Sender address on outgoing documents
    pub sender: String,

    /// Largest accepted document (bytes)
    pub max_document_bytes: usize,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            sender: DEFAULT_NOTIFICATION_SENDER.to_string(),
            max_document_bytes: DEFAULT_MAX_DOCUMENT_BYTES,
        }
    }
}

/// User module configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    /// Display name
    pub name: String,

    /// Contact email
    pub email: String,
}

impl UserConfig {
    /// Profile handed to the user module
    pub fn profile(&self) -> UserProfile {
        UserProfile::new(self.name.clone(), self.email.clone())
    }
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_USER_NAME.to_string(),
            email: DEFAULT_USER_EMAIL.to_string(),
        }
    }
}

/// Slot to provider bindings applied by the composition root
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WiringConfig {
    /// Module id bound into the user module's `document_sender` slot
    pub user_document_sender: String,
}

impl Default for WiringConfig {
    fn default() -> Self {
        Self {
            user_document_sender: DEFAULT_USER_DOCUMENT_SENDER.to_string(),
        }
    }
}
