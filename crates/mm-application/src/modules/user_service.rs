//! User Module
//!
//! Consumes the `document-sending` capability in two ways:
//!
//! - per call: [`UserService::do_something`] takes the sender as an argument
//!   and keeps nothing afterwards;
//! - pre-bound: [`UserService::do_another_thing`] and
//!   [`UserService::do_another_thing_2`] use the sender bound into the
//!   `document_sender` slot by the composition root.
//!
//! The module never sees which module sends its documents.

use mm_domain::error::{Error, Result};
use mm_domain::ports::{DOCUMENT_SENDING, DocumentSender};
use mm_domain::value_objects::{DeliveryReceipt, Document, UserProfile};
use mm_domain::wiring::{ModuleId, ModuleManifest, Slot};
use std::sync::Arc;
use tracing::{debug, info};

/// User module
#[derive(Debug)]
pub struct UserService {
    profile: UserProfile,
    document_sender: Slot<dyn DocumentSender>,
}

impl UserService {
    /// Module id
    pub const ID: ModuleId = ModuleId::new("user");

    /// Slot receiving the `document-sending` capability
    pub const DOCUMENT_SENDER_SLOT: &'static str = "document_sender";

    /// Create the module for `profile` with its slot unbound
    pub fn new(profile: UserProfile) -> Self {
        Self {
            profile,
            document_sender: Slot::new(Self::ID, Self::DOCUMENT_SENDER_SLOT),
        }
    }

    /// Needs `document-sending` in the `document_sender` slot
    pub fn manifest() -> ModuleManifest {
        ModuleManifest::new(Self::ID).requires(Self::DOCUMENT_SENDER_SLOT, DOCUMENT_SENDING)
    }

    /// Bind the `document_sender` slot, overwriting an earlier binding
    ///
    /// Returns `true` when a previous provider was replaced.
    pub fn bind_document_sender(&mut self, sender: Arc<dyn DocumentSender>) -> bool {
        let replaced = self.document_sender.bind(sender);
        if replaced {
            debug!(
                module = %Self::ID,
                slot = Self::DOCUMENT_SENDER_SLOT,
                "Rebound dependency slot"
            );
        }
        replaced
    }

    /// Whether the `document_sender` slot is bound
    pub fn has_document_sender(&self) -> bool {
        self.document_sender.is_bound()
    }

    /// The user this module works on
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Send the user's report through a sender supplied for this call only
    pub async fn do_something(&self, sender: &dyn DocumentSender) -> Result<DeliveryReceipt> {
        let report = Document::pdf(
            "User report",
            self.profile.email.clone(),
            format!("User report for {}", self.profile.name),
        );
        let receipt = sender.send_document(&report).await?;
        info!(receipt = %receipt.id, "User report sent with call-scoped sender");
        Ok(receipt)
    }

    /// Send the user's summary through the bound sender
    pub async fn do_another_thing(&self) -> Result<DeliveryReceipt> {
        let sender = self.document_sender.get()?;
        let summary = Document::pdf(
            "User summary",
            self.profile.email.clone(),
            format!("Account summary for {}", self.profile.name),
        );
        let receipt = sender.send_document(&summary).await?;
        info!(receipt = %receipt.id, "User summary sent with bound sender");
        Ok(receipt)
    }

    /// Send a notice about the user to `recipient` through the bound sender
    pub async fn do_another_thing_2(&self, recipient: &str) -> Result<DeliveryReceipt> {
        let sender = self.document_sender.get()?;
        let recipient = recipient.trim();
        if recipient.is_empty() {
            return Err(Error::invalid_argument("notice recipient must not be empty"));
        }
        let notice = Document::plain_text(
            "User notice",
            recipient,
            format!("{} <{}> has updated their account", self.profile.name, self.profile.email),
        );
        let receipt = sender.send_document(&notice).await?;
        info!(receipt = %receipt.id, "User notice sent with bound sender");
        Ok(receipt)
    }
}
