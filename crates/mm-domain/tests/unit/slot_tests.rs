//! Dependency slot tests

use async_trait::async_trait;
use mm_domain::{DeliveryReceipt, Document, DocumentSender, Error, ModuleId, Result, Slot};
use std::sync::Arc;

struct StubSender(&'static str);

#[async_trait]
impl DocumentSender for StubSender {
    async fn send_document(&self, document: &Document) -> Result<DeliveryReceipt> {
        Ok(DeliveryReceipt::issue(document, self.0))
    }
}

fn user_slot() -> Slot<dyn DocumentSender> {
    Slot::new(ModuleId::new("user"), "document_sender")
}

#[test]
fn test_unbound_slot_reports_unbound_dependency() {
    let slot = user_slot();
    assert!(!slot.is_bound());

    match slot.get() {
        Err(Error::UnboundDependency { module, slot }) => {
            assert_eq!(module.as_str(), "user");
            assert_eq!(slot, "document_sender");
        }
        other => panic!("Expected UnboundDependency, got {:?}", other.err()),
    }
}

#[test]
fn test_first_bind_does_not_report_replacement() {
    let mut slot = user_slot();
    assert!(!slot.bind(Arc::new(StubSender("first"))));
    assert!(slot.is_bound());
}

#[tokio::test]
async fn test_rebinding_overwrites_with_last_provider() {
    let mut slot = user_slot();
    slot.bind(Arc::new(StubSender("first")));
    assert!(slot.bind(Arc::new(StubSender("second"))));

    let document = Document::pdf("report", "ada@example.com", b"%PDF".to_vec());
    let receipt = slot.get().unwrap().send_document(&document).await.unwrap();
    assert_eq!(receipt.provider, "second");
}

#[tokio::test]
async fn test_binding_same_provider_twice_is_idempotent() {
    let provider: Arc<dyn DocumentSender> = Arc::new(StubSender("only"));

    let mut once = user_slot();
    once.bind(provider.clone());

    let mut twice = user_slot();
    twice.bind(provider.clone());
    twice.bind(provider.clone());

    assert!(Arc::ptr_eq(once.get().unwrap(), twice.get().unwrap()));

    let document = Document::pdf("report", "ada@example.com", b"%PDF".to_vec());
    let a = once.get().unwrap().send_document(&document).await.unwrap();
    let b = twice.get().unwrap().send_document(&document).await.unwrap();
    assert_eq!(a.provider, b.provider);
    assert_eq!(a.recipient, b.recipient);
}

#[test]
fn test_debug_does_not_require_provider_debug() {
    let slot = user_slot();
    let debug = format!("{slot:?}");
    assert!(debug.contains("document_sender"));
    assert!(debug.contains("bound: false"));
}
