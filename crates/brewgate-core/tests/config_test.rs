//! Config defaults, TOML overrides, validation and error codes.

use std::io::Write;

use brewgate_core::config::BrewgateConfig;
use brewgate_core::errors::{BrewgateErrorCode, ConfigError};

#[test]
fn defaults_match_storefront() {
    let config = BrewgateConfig::default();
    assert_eq!(config.entitlement.effective_storage_key(), "exclusive_access");
    assert_eq!(config.entitlement.effective_validity_hours(), 24.0);
    assert_eq!(config.checkout.effective_session_param(), "session_id");
    assert_eq!(config.checkout.effective_gate_path(), "/exclusive");
    assert_eq!(config.checkout.verify_url(), "http://localhost:3001/api/verify-payment");
    assert_eq!(config.checkout.effective_connect_timeout().as_secs(), 10);
    assert_eq!(config.checkout.effective_request_timeout().as_secs(), 30);
    assert_eq!(config.storage.effective_busy_timeout_ms(), 5000);
    assert!(config.storage.db_path.is_none());
    assert_eq!(config.logging.effective_filter(), "info");
    assert!(!config.logging.effective_json());
}

#[test]
fn empty_toml_is_all_defaults() {
    let config = BrewgateConfig::from_toml("").unwrap();
    assert_eq!(config.entitlement.effective_validity_hours(), 24.0);
}

#[test]
fn partial_toml_overrides_only_named_fields() {
    let config = BrewgateConfig::from_toml(
        r#"
        [entitlement]
        validity_hours = 72

        [checkout]
        api_base_url = "https://api.coffee.example"

        [logging]
        json = true
        "#,
    )
    .unwrap();

    assert_eq!(config.entitlement.effective_validity_hours(), 72.0);
    assert_eq!(config.entitlement.effective_storage_key(), "exclusive_access");
    assert_eq!(
        config.checkout.verify_url(),
        "https://api.coffee.example/api/verify-payment"
    );
    assert!(config.logging.effective_json());
}

#[test]
fn non_positive_validity_rejected() {
    for bad in ["0", "-3", "-0.5"] {
        let err = BrewgateConfig::from_toml(&format!("[entitlement]\nvalidity_hours = {bad}"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "entitlement.validity_hours", .. }));
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }
}

#[test]
fn blank_keys_rejected() {
    let err = BrewgateConfig::from_toml("[entitlement]\nstorage_key = \" \"").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { key: "entitlement.storage_key", .. }));

    let err = BrewgateConfig::from_toml("[checkout]\nsession_param = \"\"").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { key: "checkout.session_param", .. }));
}

#[test]
fn blank_checkout_endpoints_rejected() {
    for (field, key) in [
        ("api_base_url", "checkout.api_base_url"),
        ("verify_path", "checkout.verify_path"),
        ("gate_path", "checkout.gate_path"),
    ] {
        let err = BrewgateConfig::from_toml(&format!("[checkout]\n{field} = \"  \""))
            .unwrap_err();
        match err {
            ConfigError::InvalidValue { key: got, .. } => assert_eq!(got, key),
            other => panic!("expected InvalidValue for {field}, got {other:?}"),
        }
    }
}

#[test]
fn malformed_toml_is_parse_error() {
    let err = BrewgateConfig::from_toml("[entitlement\nvalidity_hours = ").unwrap_err();
    assert_eq!(err.error_code(), "CONFIG_PARSE_ERROR");
}

#[test]
fn load_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[storage]\ndb_path = \"/tmp/brewgate.db\"").unwrap();

    let config = BrewgateConfig::load(file.path()).unwrap();
    assert_eq!(
        config.storage.db_path.as_deref(),
        Some(std::path::Path::new("/tmp/brewgate.db"))
    );
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = BrewgateConfig::load(&dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
