//! Runtime Initialization
//!
//! Loads configuration, initializes logging, composes the module graph and
//! runs one facade operation against it.
//!
//! ```text
//! load_config → init_logging → init_app → RestService → execute(operation)
//! ```
//!
//! # Configuration
//!
//! The provider bound into the user module can be switched without code
//! changes:
//! - Config file: `wiring.user_document_sender = "notification"`
//! - Environment variable: `MM__WIRING__USER_DOCUMENT_SENDER=notification`

use std::path::Path;

use mm_domain::error::Result;
use mm_domain::value_objects::{Address, DeliveryReceipt};
use mm_infrastructure::config::{AppConfig, ConfigLoader};
use mm_infrastructure::di::WiringOrder;
use mm_infrastructure::{AppContext, init_app};
use serde::Serialize;
use tracing::info;

use crate::RestService;

/// One facade call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Address lookup with empty criteria
    FindAddresses,
    /// User report through the per-call sender
    UserStuff,
    /// User summary, or a notice to `recipient`, through the bound sender
    MoreUserStuff {
        /// Explicit notice recipient
        recipient: Option<String>,
    },
    /// Print the validated construction order
    Wiring,
}

/// Result of an [`Operation`]
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OperationOutcome {
    /// Addresses found
    Addresses {
        /// Matches in directory order
        addresses: Vec<Address>,
    },
    /// A document was handed to the bound or per-call sender
    Delivered {
        /// Receipt issued by the provider
        receipt: DeliveryReceipt,
    },
    /// Construction order of the wired graph
    Wiring {
        /// Module ids, providers first
        order: Vec<String>,
        /// Slot bindings applied by the composition root
        bindings: Vec<WiringBinding>,
    },
}

/// One `consumer.slot ← provider` binding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WiringBinding {
    /// Module owning the slot
    pub consumer: String,
    /// Slot name
    pub slot: String,
    /// Module bound into the slot
    pub provider: String,
}

impl From<&WiringOrder> for OperationOutcome {
    fn from(order: &WiringOrder) -> Self {
        Self::Wiring {
            order: order.modules().iter().map(ToString::to_string).collect(),
            bindings: order
                .bindings()
                .map(|(consumer, slot, provider)| WiringBinding {
                    consumer: consumer.to_string(),
                    slot: slot.to_string(),
                    provider: provider.to_string(),
                })
                .collect(),
        }
    }
}

/// Run `operation` against a freshly composed module graph
///
/// This is the main entry point used by the binary.
pub async fn run(config_path: Option<&Path>, operation: Operation) -> Result<OperationOutcome> {
    let config = load_config(config_path)?;
    mm_infrastructure::logging::init_logging(&config.logging)?;

    info!(?operation, "Starting micromonolith");

    let context = init_app(config)?;
    info!(wiring = %context.wiring(), "Module graph composed");

    execute(&context, operation).await
}

/// Load configuration from optional path
pub fn load_config(config_path: Option<&Path>) -> Result<AppConfig> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    loader.load()
}

/// Compose the module graph and publish its facade
pub fn create_rest_service(config: AppConfig) -> Result<RestService> {
    let context = init_app(config)?;
    Ok(RestService::from_context(&context))
}

/// Run one operation against an already composed graph
pub async fn execute(context: &AppContext, operation: Operation) -> Result<OperationOutcome> {
    let service = RestService::from_context(context);
    let outcome = match operation {
        Operation::FindAddresses => OperationOutcome::Addresses {
            addresses: service.find_addresses().await?,
        },
        Operation::UserStuff => OperationOutcome::Delivered {
            receipt: service.do_user_stuff().await?,
        },
        Operation::MoreUserStuff { recipient: None } => OperationOutcome::Delivered {
            receipt: service.do_more_user_stuff().await?,
        },
        Operation::MoreUserStuff {
            recipient: Some(recipient),
        } => OperationOutcome::Delivered {
            receipt: service.do_more_user_stuff_for(&recipient).await?,
        },
        Operation::Wiring => OperationOutcome::from(context.wiring()),
    };
    Ok(outcome)
}
