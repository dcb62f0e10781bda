//! Notification module tests

use mm_application::EmailService;
use mm_domain::{DOCUMENT_SENDING, Document, DocumentSender, Error};

fn service() -> EmailService {
    EmailService::new("noreply@example.com", 64)
}

#[test]
fn test_manifest_provides_document_sending() {
    let manifest = EmailService::manifest();
    assert_eq!(manifest.id.as_str(), "notification");
    assert!(manifest.provides_capability(DOCUMENT_SENDING));
    assert!(manifest.requires.is_empty());
}

#[tokio::test]
async fn test_send_issues_receipt() {
    let document = Document::pdf("Report", "ada@example.com", b"%PDF-1.7".to_vec());
    let receipt = service().send_document(&document).await.unwrap();

    assert_eq!(receipt.recipient, "ada@example.com");
    assert_eq!(receipt.title, "Report");
    assert_eq!(receipt.provider, "notification");
}

#[tokio::test]
async fn test_missing_recipient_is_capability_failure() {
    let document = Document::pdf("Report", "  ", b"%PDF".to_vec());
    let error = service().send_document(&document).await.unwrap_err();
    match error {
        Error::Capability { capability, message, .. } => {
            assert_eq!(capability, DOCUMENT_SENDING);
            assert!(message.contains("no recipient"));
        }
        other => panic!("Expected Capability error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_document_is_capability_failure() {
    let document = Document::pdf("Report", "ada@example.com", Vec::new());
    let error = service().send_document(&document).await.unwrap_err();
    assert!(error.is_capability());
}

#[tokio::test]
async fn test_oversized_document_is_capability_failure() {
    let document = Document::pdf("Report", "ada@example.com", vec![b'x'; 65]);
    let error = service().send_document(&document).await.unwrap_err();
    assert!(error.is_capability());
    assert!(error.to_string().contains("limit is 64"));
}

#[tokio::test]
async fn test_document_at_size_limit_is_accepted() {
    let document = Document::pdf("Report", "ada@example.com", vec![b'x'; 64]);
    assert!(service().send_document(&document).await.is_ok());
}
