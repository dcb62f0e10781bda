//! Composition Root
//!
//! The only place that constructs modules and binds their slots.
//!
//! ```text
//! AppConfig → WiringPlan → validate() → WiringOrder → construct + bind → AppContext
//!                              │
//!                              └─ ConstructionError: nothing is constructed
//! ```
//!
//! Modules are built in the validated order, so a provider always exists
//! before it is bound into a consumer. Binding takes `&mut` on the consumer
//! and happens before the consumer is moved into an `Arc`; once
//! [`AppContext`] is returned the graph is read-only.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(AppConfig::default())?;
//! let receipt = context.user().do_another_thing().await?;
//! ```

use crate::config::{AppConfig, WiringConfig};
use crate::di::plan::{WiringOrder, WiringPlan};
use mm_application::{AddressService, EmailService, UserService};
use mm_domain::error::{ConstructionError, Error, Result};
use mm_domain::ports::{DOCUMENT_SENDING, DocumentSender};
use mm_domain::wiring::ModuleId;
use std::sync::Arc;
use tracing::{debug, info};

/// The fully wired module graph
///
/// Built once by [`init_app`]. Holds the canonical instance of every module;
/// callers normally receive only the facade built from it.
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    wiring: WiringOrder,
    address: Arc<AddressService>,
    notification: Arc<EmailService>,
    user: Arc<UserService>,
}

impl AppContext {
    /// Address module
    pub fn address(&self) -> Arc<AddressService> {
        self.address.clone()
    }

    /// Notification module
    pub fn notification(&self) -> Arc<EmailService> {
        self.notification.clone()
    }

    /// User module
    pub fn user(&self) -> Arc<UserService> {
        self.user.clone()
    }

    /// The validated order and bindings this graph was built from
    pub fn wiring(&self) -> &WiringOrder {
        &self.wiring
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("wiring", &self.wiring.to_string())
            .field("user_document_sender", &self.user.has_document_sender())
            .finish_non_exhaustive()
    }
}

/// Default wiring plan: the three modules plus the configured bindings
pub fn wiring_plan(wiring: &WiringConfig) -> Result<WiringPlan> {
    let mut plan = WiringPlan::new();
    plan.register(AddressService::manifest())?;
    plan.register(EmailService::manifest())?;
    plan.register(UserService::manifest())?;

    let sender = plan.resolve_module(&wiring.user_document_sender)?;
    plan.bind(UserService::ID, UserService::DOCUMENT_SENDER_SLOT, sender);

    Ok(plan)
}

/// Build the module graph from configuration
///
/// Validates the wiring plan first; a construction error leaves nothing
/// constructed.
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    info!("Composing application modules");

    let config = Arc::new(config);
    let order = wiring_plan(&config.wiring)?.validate()?;
    info!(order = %order, "Validated wiring plan");

    compose(config, order)
}

/// Construct modules in `order` and apply its bindings
fn compose(config: Arc<AppConfig>, order: WiringOrder) -> Result<AppContext> {
    let mut address: Option<Arc<AddressService>> = None;
    let mut notification: Option<Arc<EmailService>> = None;
    let mut user: Option<Arc<UserService>> = None;

    for &module in order.modules() {
        match module {
            AddressService::ID => {
                address = Some(Arc::new(AddressService::new(
                    config.address.directory.clone(),
                )));
            }
            EmailService::ID => {
                notification = Some(Arc::new(EmailService::new(
                    config.notification.sender.clone(),
                    config.notification.max_document_bytes,
                )));
            }
            UserService::ID => {
                let mut service = UserService::new(config.user.profile());
                if let Some(provider) =
                    order.provider_for(UserService::ID, UserService::DOCUMENT_SENDER_SLOT)
                {
                    service.bind_document_sender(document_sender(
                        provider,
                        notification.as_ref(),
                    )?);
                    debug!(%provider, "Bound user.document_sender");
                }
                user = Some(Arc::new(service));
            }
            other => {
                return Err(ConstructionError::UnknownModule {
                    module: other.to_string(),
                }
                .into());
            }
        }
        info!(%module, "Constructed module");
    }

    let (Some(address), Some(notification), Some(user)) = (address, notification, user) else {
        return Err(Error::internal(
            "wiring order did not construct every module",
        ));
    };

    Ok(AppContext {
        config,
        wiring: order,
        address,
        notification,
        user,
    })
}

/// Concrete `document-sending` provider for a module id
fn document_sender(
    provider: ModuleId,
    notification: Option<&Arc<EmailService>>,
) -> Result<Arc<dyn DocumentSender>> {
    match provider {
        EmailService::ID => notification
            .map(|service| Arc::clone(service) as Arc<dyn DocumentSender>)
            .ok_or_else(|| {
                Error::internal(format!(
                    "provider '{provider}' bound before it was constructed"
                ))
            }),
        other => Err(ConstructionError::CapabilityMismatch {
            consumer: UserService::ID.to_string(),
            slot: UserService::DOCUMENT_SENDER_SLOT.to_string(),
            provider: other.to_string(),
            capability: DOCUMENT_SENDING.to_string(),
        }
        .into()),
    }
}
