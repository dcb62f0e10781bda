//! Notification Module
//!
//! Provides the `document-sending` capability. Delivery itself belongs to the
//! mail transport outside this crate; the module checks the document, logs
//! the hand-off and issues a receipt.

use async_trait::async_trait;
use mm_domain::error::{Error, Result};
use mm_domain::ports::{DOCUMENT_SENDING, DocumentSender};
use mm_domain::value_objects::{DeliveryReceipt, Document};
use mm_domain::wiring::{ModuleId, ModuleManifest};
use tracing::info;

/// Email notification module
#[derive(Debug, Clone)]
pub struct EmailService {
    sender: String,
    max_document_bytes: usize,
}

impl EmailService {
    /// Module id
    pub const ID: ModuleId = ModuleId::new("notification");

    /// Create the module sending from `sender`, rejecting documents above
    /// `max_document_bytes`
    pub fn new(sender: impl Into<String>, max_document_bytes: usize) -> Self {
        Self {
            sender: sender.into(),
            max_document_bytes,
        }
    }

    /// Provides `document-sending`, needs nothing
    pub fn manifest() -> ModuleManifest {
        ModuleManifest::new(Self::ID).provides(DOCUMENT_SENDING)
    }

    /// Address documents are sent from
    pub fn sender(&self) -> &str {
        &self.sender
    }

    fn check(&self, document: &Document) -> Result<()> {
        if document.recipient.trim().is_empty() {
            return Err(Error::capability(
                DOCUMENT_SENDING,
                format!("document '{}' has no recipient", document.title),
            ));
        }
        if document.content.is_empty() {
            return Err(Error::capability(
                DOCUMENT_SENDING,
                format!("document '{}' is empty", document.title),
            ));
        }
        if document.size() > self.max_document_bytes {
            return Err(Error::capability(
                DOCUMENT_SENDING,
                format!(
                    "document '{}' is {} bytes, limit is {}",
                    document.title,
                    document.size(),
                    self.max_document_bytes
                ),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentSender for EmailService {
    async fn send_document(&self, document: &Document) -> Result<DeliveryReceipt> {
        self.check(document)?;

        let receipt = DeliveryReceipt::issue(document, Self::ID.as_str());
        info!(
            receipt = %receipt.id,
            from = %self.sender,
            to = %receipt.recipient,
            title = %receipt.title,
            format = ?document.format,
            bytes = document.size(),
            "Document handed to mail transport"
        );
        Ok(receipt)
    }
}
