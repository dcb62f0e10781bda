use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Encoding of a document's content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    /// Portable document format
    Pdf,
    /// Plain UTF-8 text
    PlainText,
}

/// A document addressed to a single recipient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Document title
    pub title: String,
    /// Content encoding
    pub format: DocumentFormat,
    /// Recipient address (for example an email address)
    pub recipient: String,
    /// Raw content
    pub content: Vec<u8>,
}

impl Document {
    /// Create a PDF document
    pub fn pdf(
        title: impl Into<String>,
        recipient: impl Into<String>,
        content: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            title: title.into(),
            format: DocumentFormat::Pdf,
            recipient: recipient.into(),
            content: content.into(),
        }
    }

    /// Create a plain text document
    pub fn plain_text(
        title: impl Into<String>,
        recipient: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            format: DocumentFormat::PlainText,
            recipient: recipient.into(),
            content: content.into().into_bytes(),
        }
    }

    /// Content size in bytes
    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// Proof that a provider accepted a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    /// Receipt identifier
    pub id: Uuid,
    /// Who the document went to
    pub recipient: String,
    /// Title of the delivered document
    pub title: String,
    /// Name of the provider that delivered it
    pub provider: String,
    /// When the provider accepted the document
    pub sent_at: DateTime<Utc>,
}

impl DeliveryReceipt {
    /// Receipt for `document` issued now by `provider`
    pub fn issue(document: &Document, provider: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            recipient: document.recipient.clone(),
            title: document.title.clone(),
            provider: provider.into(),
            sent_at: Utc::now(),
        }
    }
}
