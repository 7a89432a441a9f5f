//! Integration tests for configuration loading precedence.

use incubator_client::config::{ClientConfig, ConfigArgs, DEFAULT_BASE_URL};
use serial_test::serial;
use std::env;
use std::fs;

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("INCUBATOR_API__BASE_URL");
        env::remove_var("INCUBATOR_API__TIMEOUT_SECS");
        env::remove_var("INCUBATOR_SESSION__FILE");
        env::remove_var("CONFIG_FILE");
    }
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = ClientConfig::load().expect("Failed to load config");
    assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.api.timeout_secs, 30);
    assert_eq!(config.session.file, ".incubator-session.json");
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("INCUBATOR_API__BASE_URL", "http://10.0.0.5:9000");
        env::set_var("INCUBATOR_API__TIMEOUT_SECS", "5");
    }

    let config = ClientConfig::load().expect("Failed to load config");
    assert_eq!(config.api.base_url, "http://10.0.0.5:9000");
    assert_eq!(config.api.timeout_secs, 5);

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let config_content = r"
api:
  timeout_secs: 7
session:
  file: /tmp/incubator-test-session.json
    ";

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let file_path = dir.path().join("test_config.yaml");
    fs::write(&file_path, config_content).expect("Failed to write temp config");

    unsafe {
        env::set_var("CONFIG_FILE", file_path.to_str().unwrap());
    }

    let config = ClientConfig::load().expect("Failed to load config from file");
    assert_eq!(config.api.timeout_secs, 7);
    assert_eq!(config.session.file, "/tmp/incubator-test-session.json");
    // Keys the file doesn't set fall back to defaults.
    assert_eq!(config.api.base_url, DEFAULT_BASE_URL);

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_flags_win_over_env() {
    clear_env_vars();
    unsafe {
        env::set_var("INCUBATOR_API__BASE_URL", "http://from-env:8000");
    }

    let args = ConfigArgs {
        api_url: Some("http://from-cli:8000".to_string()),
        timeout_secs: Some(3),
        ..ConfigArgs::default()
    };
    let config = ClientConfig::load_with(&args).expect("Failed to load config");
    assert_eq!(config.api.base_url, "http://from-cli:8000");
    assert_eq!(config.api.timeout_secs, 3);

    clear_env_vars();
}
