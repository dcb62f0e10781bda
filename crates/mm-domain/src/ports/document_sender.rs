//! Document-Sending Capability
//!
//! Consumed by modules that need to deliver a document to a recipient.

use crate::error::Result;
use crate::value_objects::{DeliveryReceipt, Document};
use crate::wiring::CapabilityId;
use async_trait::async_trait;

/// Capability id under which providers of [`DocumentSender`] register
pub const DOCUMENT_SENDING: CapabilityId = CapabilityId::new("document-sending");

/// Can send a document
#[async_trait]
pub trait DocumentSender: Send + Sync {
    /// Deliver the document and return the provider's receipt
    async fn send_document(&self, document: &Document) -> Result<DeliveryReceipt>;
}
