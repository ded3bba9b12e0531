//! Tests for TOML config loading and graceful degradation
//!
//! - Explicit config paths must exist and parse
//! - Missing sections fall back to built-in defaults
//! - Malformed TOML surfaces as a parse error

use plantid_common::config::{load_or_default, load_toml_config, DEFAULT_ENDPOINT};
use plantid_common::Error;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"
        api_key = "secret-key"
        endpoint = "http://127.0.0.1:9000/identify"

        [logging]
        level = "debug"

        [identification]
        confidence_threshold = 90.0
        max_attempts = 2
        retry_delay_ms = 10
        requests_per_second = 20
        request_timeout_secs = 5
        "#,
    );

    let config = load_toml_config(file.path()).unwrap();

    assert_eq!(config.api_key.as_deref(), Some("secret-key"));
    assert_eq!(config.endpoint_or_default(), "http://127.0.0.1:9000/identify");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.identification.confidence_threshold, 90.0);
    assert_eq!(config.identification.max_attempts, 2);
    assert_eq!(config.identification.retry_delay_ms, 10);
    assert_eq!(config.identification.requests_per_second, 20);
    assert_eq!(config.identification.request_timeout_secs, 5);
}

#[test]
fn test_missing_sections_use_defaults() {
    let file = write_config("api_key = \"k\"\n");

    let config = load_toml_config(file.path()).unwrap();

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.identification.max_attempts, 5);
    assert_eq!(config.endpoint_or_default(), DEFAULT_ENDPOINT);
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let file = write_config("api_key = [unterminated\n");

    let result = load_toml_config(file.path());

    assert!(matches!(result, Err(Error::TomlParse(_))));
}

#[test]
fn test_explicit_missing_path_is_config_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");

    let result = load_or_default(Some(&missing));

    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_explicit_path_is_loaded() {
    let file = write_config("[identification]\nmax_attempts = 7\n");

    let config = load_or_default(Some(file.path())).unwrap();

    assert_eq!(config.identification.max_attempts, 7);
}
