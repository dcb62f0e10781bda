//! Composition root tests

use mm_domain::{Address, AddressCriteria, AddressFinder, ConstructionError, Error};
use mm_infrastructure::config::AppConfig;
use mm_infrastructure::di::{init_app, wiring_plan};
use std::sync::Arc;

fn construction_error(error: Error) -> ConstructionError {
    match error {
        Error::Construction(inner) => inner,
        other => panic!("Expected Construction error, got {other:?}"),
    }
}

#[test]
fn test_default_plan_orders_providers_first() {
    let order = wiring_plan(&AppConfig::default().wiring)
        .unwrap()
        .validate()
        .unwrap();

    let notification = order.position(mm_application::EmailService::ID).unwrap();
    let user = order.position(mm_application::UserService::ID).unwrap();
    assert!(notification < user);
    assert_eq!(order.modules().len(), 3);
    assert_eq!(
        order.provider_for(mm_application::UserService::ID, "document_sender"),
        Some(mm_application::EmailService::ID)
    );
}

#[test]
fn test_init_app_binds_user_document_sender() {
    let context = init_app(AppConfig::default()).expect("default wiring is valid");
    assert!(context.user().has_document_sender());
    assert_eq!(context.wiring().to_string(), "address -> notification -> user");
}

#[tokio::test]
async fn test_wired_user_module_sends_through_notification() {
    let context = init_app(AppConfig::default()).unwrap();
    let receipt = context.user().do_another_thing().await.unwrap();
    assert_eq!(receipt.provider, "notification");
    assert_eq!(receipt.recipient, context.config.user.email);
}

#[test]
fn test_context_hands_out_the_same_instances() {
    let context = init_app(AppConfig::default()).unwrap();
    assert!(Arc::ptr_eq(&context.user(), &context.user()));
    assert!(Arc::ptr_eq(&context.notification(), &context.notification()));
    assert!(Arc::ptr_eq(&context.address(), &context.address()));
}

#[tokio::test]
async fn test_address_directory_comes_from_config() {
    let mut config = AppConfig::default();
    config.address.directory = vec![Address::new("Storgata 10", "0155", "Oslo", "Norway")];

    let context = init_app(config).unwrap();
    let found = context
        .address()
        .find_addresses(&AddressCriteria::new().with_city("Oslo"))
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
}

#[test]
fn test_unknown_provider_in_config_is_construction_error() {
    let mut config = AppConfig::default();
    config.wiring.user_document_sender = "fax".to_string();

    let error = construction_error(init_app(config).unwrap_err());
    assert_eq!(error, ConstructionError::UnknownModule { module: "fax".into() });
}

#[test]
fn test_provider_without_capability_is_construction_error() {
    let mut config = AppConfig::default();
    config.wiring.user_document_sender = "address".to_string();

    let error = construction_error(init_app(config).unwrap_err());
    assert!(matches!(error, ConstructionError::CapabilityMismatch { .. }));
}

#[test]
fn test_user_bound_to_itself_is_construction_error() {
    let mut config = AppConfig::default();
    config.wiring.user_document_sender = "user".to_string();

    let error = init_app(config).unwrap_err();
    assert!(error.is_construction());
}

#[test]
fn test_debug_shows_wiring() {
    let context = init_app(AppConfig::default()).unwrap();
    let debug = format!("{context:?}");
    assert!(debug.contains("address -> notification -> user"));
}
