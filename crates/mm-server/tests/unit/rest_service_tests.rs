//! Facade behaviour tests

use crate::test_utils::{
    CountingSender, OfflineSender, service_with_sender, unwired_service,
};
use mm_domain::{AddressCriteria, Error};
use mm_infrastructure::config::AppConfig;
use mm_server::{RestService, create_rest_service};
use std::sync::Arc;

fn wired_service() -> RestService {
    create_rest_service(AppConfig::default()).expect("default wiring is valid")
}

#[tokio::test]
async fn test_more_user_stuff_uses_bound_notification_module() {
    let receipt = wired_service().do_more_user_stuff().await.unwrap();
    assert_eq!(receipt.provider, "notification");
    assert_eq!(receipt.title, "User summary");
}

#[tokio::test]
async fn test_more_user_stuff_without_binding_is_unbound_dependency() {
    let error = unwired_service().do_more_user_stuff().await.unwrap_err();
    match error {
        Error::UnboundDependency { module, slot } => {
            assert_eq!(module.as_str(), "user");
            assert_eq!(slot, "document_sender");
        }
        other => panic!("Expected UnboundDependency, got {other:?}"),
    }
}

#[tokio::test]
async fn test_user_stuff_passes_sender_per_call() {
    let receipt = unwired_service().do_user_stuff().await.unwrap();
    assert_eq!(receipt.provider, "notification");
    assert_eq!(receipt.title, "User report");
}

#[tokio::test]
async fn test_user_stuff_leaves_slot_unbound() {
    let service = unwired_service();
    service.do_user_stuff().await.unwrap();
    assert!(
        service
            .do_more_user_stuff()
            .await
            .unwrap_err()
            .is_unbound_dependency()
    );
}

#[tokio::test]
async fn test_find_addresses_with_empty_criteria_is_empty() {
    let found = unwired_service().find_addresses().await.unwrap();
    assert!(found.is_empty());
}

#[tokio::test]
async fn test_find_addresses_matching_filters_directory() {
    let found = unwired_service()
        .find_addresses_matching(&AddressCriteria::new().with_country("sweden"))
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].city, "Stockholm");
}

#[tokio::test]
async fn test_more_user_stuff_for_explicit_recipient() {
    let receipt = wired_service()
        .do_more_user_stuff_for("ops@example.com")
        .await
        .unwrap();
    assert_eq!(receipt.recipient, "ops@example.com");
    assert_eq!(receipt.title, "User notice");
}

#[tokio::test]
async fn test_more_user_stuff_for_unbound_reports_slot_before_argument() {
    let error = unwired_service()
        .do_more_user_stuff_for("")
        .await
        .unwrap_err();
    assert!(error.is_unbound_dependency());
}

#[tokio::test]
async fn test_more_user_stuff_for_blank_recipient_is_invalid_argument() {
    let error = wired_service()
        .do_more_user_stuff_for("   ")
        .await
        .unwrap_err();
    assert!(matches!(error, Error::InvalidArgument { .. }));
}

#[tokio::test]
async fn test_substituted_provider_keeps_contract() {
    let counting = Arc::new(CountingSender::default());
    let service = service_with_sender(counting.clone());

    let receipt = service.do_more_user_stuff().await.unwrap();
    assert_eq!(receipt.provider, "counting");
    assert_eq!(receipt.title, "User summary");
    assert_eq!(counting.sends(), 1);
}

#[tokio::test]
async fn test_provider_failure_reaches_caller_unchanged() {
    let error = service_with_sender(Arc::new(OfflineSender))
        .do_more_user_stuff()
        .await
        .unwrap_err();
    match error {
        Error::Capability {
            capability,
            message,
            ..
        } => {
            assert_eq!(capability.as_str(), "document-sending");
            assert_eq!(message, "relay offline");
        }
        other => panic!("Expected Capability error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_notification_limit_surfaces_as_capability_error() {
    let mut config = AppConfig::default();
    config.notification.max_document_bytes = 4;

    let error = create_rest_service(config)
        .unwrap()
        .do_more_user_stuff()
        .await
        .unwrap_err();
    assert!(error.is_capability());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_clones_serve_concurrent_callers() {
    let counting = Arc::new(CountingSender::default());
    let service = service_with_sender(counting.clone());

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move {
                if i % 2 == 0 {
                    service.do_more_user_stuff().await
                } else {
                    service.do_user_stuff().await
                }
            })
        })
        .collect();

    let results = futures::future::join_all(handles).await;
    for result in results {
        result.expect("task panicked").expect("send succeeded");
    }
    assert_eq!(counting.sends(), 8);
}

#[test]
fn test_rest_service_is_send_sync_clone() {
    fn assert_shareable<T: Send + Sync + Clone + 'static>() {}
    assert_shareable::<RestService>();
}
