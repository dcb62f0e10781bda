//! Error context extension tests

use mm_domain::Error;
use mm_infrastructure::ErrorContext;
use std::error::Error as _;

fn failing_io() -> std::result::Result<(), std::io::Error> {
    Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"))
}

#[test]
fn test_context_wraps_as_infrastructure_with_source() {
    let error = failing_io().context("Failed to write file").unwrap_err();
    match &error {
        Error::Infrastructure { message, .. } => {
            assert!(message.starts_with("Failed to write file"));
            assert!(message.contains("denied"));
        }
        other => panic!("Expected Infrastructure error, got {other:?}"),
    }
    assert!(error.source().is_some());
}

#[test]
fn test_with_context_is_lazy() {
    let mut called = false;
    let ok: std::result::Result<u8, std::io::Error> = Ok(1);
    let value = ok
        .with_context(|| {
            called = true;
            "never"
        })
        .unwrap();
    assert_eq!(value, 1);
    assert!(!called);
}

#[test]
fn test_config_context_wraps_as_configuration() {
    let error = failing_io().config_context("Bad config").unwrap_err();
    assert!(matches!(error, Error::Configuration { source: Some(_), .. }));
}
