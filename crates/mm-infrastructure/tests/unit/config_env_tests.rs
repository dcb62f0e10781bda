//! Environment override tests
//!
//! These tests modify environment variables and must run sequentially:
//!
//! ```bash
//! cargo test -p mm-infrastructure --test unit config_env -- --test-threads=1 --ignored
//! ```
//!
//! # Safety
//!
//! Rust 2024 requires `unsafe` for `env::set_var`/`env::remove_var`.
//! Tests MUST run with `--test-threads=1` to prevent data races.

use mm_infrastructure::config::ConfigLoader;
use std::env;

fn set_env(key: &str, value: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var(key, value);
    }
}

fn remove_env(key: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var(key);
    }
}

fn empty_config_path() -> std::path::PathBuf {
    std::env::temp_dir().join("micromonolith-env-tests-absent.toml")
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_nested_env_var_overrides_default() {
    set_env("MM__NOTIFICATION__SENDER", "env@example.com");

    let config = ConfigLoader::new()
        .with_config_path(empty_config_path())
        .load()
        .expect("Should load config");
    assert_eq!(config.notification.sender, "env@example.com");

    remove_env("MM__NOTIFICATION__SENDER");
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_var_selects_wiring_provider() {
    set_env("MM__WIRING__USER_DOCUMENT_SENDER", "address");

    let config = ConfigLoader::new()
        .with_config_path(empty_config_path())
        .load()
        .expect("Should load config");
    assert_eq!(config.wiring.user_document_sender, "address");

    remove_env("MM__WIRING__USER_DOCUMENT_SENDER");
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_custom_prefix_is_honoured() {
    set_env("CUSTOM__USER__NAME", "Prefixed");

    let config = ConfigLoader::new()
        .with_config_path(empty_config_path())
        .with_env_prefix("CUSTOM__")
        .load()
        .expect("Should load config");
    assert_eq!(config.user.name, "Prefixed");

    remove_env("CUSTOM__USER__NAME");
}
