//! REST Service Facade
//!
//! Thin delegation layer over the wired modules. It owns no state besides
//! shared references, so cloning it is cheap and every clone sees the same
//! graph.

use std::sync::Arc;

use mm_application::{AddressService, EmailService, UserService};
use mm_domain::error::Result;
use mm_domain::ports::AddressFinder;
use mm_domain::value_objects::{Address, AddressCriteria, DeliveryReceipt};
use mm_infrastructure::AppContext;
use tracing::debug;

/// Facade over the address, notification and user modules
///
/// Errors from the modules are returned unchanged.
#[derive(Debug, Clone)]
pub struct RestService {
    address: Arc<AddressService>,
    notification: Arc<EmailService>,
    user: Arc<UserService>,
}

impl RestService {
    /// Create the facade from already constructed modules
    pub fn new(
        address: Arc<AddressService>,
        notification: Arc<EmailService>,
        user: Arc<UserService>,
    ) -> Self {
        Self {
            address,
            notification,
            user,
        }
    }

    /// Create the facade over a wired module graph
    pub fn from_context(context: &AppContext) -> Self {
        Self::new(context.address(), context.notification(), context.user())
    }

    /// Look up addresses with empty criteria
    ///
    /// Empty criteria match nothing, so this returns an empty list.
    pub async fn find_addresses(&self) -> Result<Vec<Address>> {
        self.find_addresses_matching(&AddressCriteria::default()).await
    }

    /// Look up addresses matching `criteria`
    pub async fn find_addresses_matching(
        &self,
        criteria: &AddressCriteria,
    ) -> Result<Vec<Address>> {
        let found = self.address.find_addresses(criteria).await?;
        debug!(count = found.len(), "Address lookup finished");
        Ok(found)
    }

    /// Send the user report, handing the notification module to this call only
    pub async fn do_user_stuff(&self) -> Result<DeliveryReceipt> {
        self.user.do_something(self.notification.as_ref()).await
    }

    /// Send the user summary through the user module's bound sender
    pub async fn do_more_user_stuff(&self) -> Result<DeliveryReceipt> {
        self.user.do_another_thing().await
    }

    /// Send a user notice to `recipient` through the bound sender
    pub async fn do_more_user_stuff_for(&self, recipient: &str) -> Result<DeliveryReceipt> {
        self.user.do_another_thing_2(recipient).await
    }
}
