//! Integration-level unit tests for the SettingsEngine public API.
//!
//! These tests exercise the SettingsEngine through its public trait interface,
//! validating default loading, dot-path updates, persistence and reset behavior.

use serde_json::json;
use tempfile::TempDir;

use smartweb::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use smartweb::types::errors::SettingsError;
use smartweb::types::settings::{AppSettings, ThemeMode};

/// Helper: create a SettingsEngine backed by a temp directory that lives for the
/// duration of the test (the caller holds the `TempDir` handle).
fn engine_in_temp(dir: &TempDir) -> SettingsEngine {
    let path = dir
        .path()
        .join("settings.json")
        .to_string_lossy()
        .to_string();
    SettingsEngine::new(Some(path))
}

#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let settings = engine.load().unwrap();

    assert_eq!(settings, AppSettings::default());
    assert_eq!(settings.appearance.theme, ThemeMode::System);
    assert_eq!(settings.storage.database_path, None);
    assert_eq!(settings.logging.filter, "smartweb=info");
}

/// A change made through one engine must be visible to a fresh engine reading the same file.
#[test]
fn test_set_value_persists_changes() {
    let dir = TempDir::new().unwrap();

    {
        let mut engine = engine_in_temp(&dir);
        engine.load().unwrap();
        engine.set_value("appearance.theme", json!("Dark")).unwrap();
        engine
            .set_value("storage.database_path", json!("/data/webapps.db"))
            .unwrap();
    }

    let mut engine2 = engine_in_temp(&dir);
    let loaded = engine2.load().unwrap();
    assert_eq!(loaded.appearance.theme, ThemeMode::Dark);
    assert_eq!(loaded.storage.database_path.as_deref(), Some("/data/webapps.db"));
}

#[test]
fn test_database_path_can_be_cleared_with_null() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.set_value("storage.database_path", json!("/a.db")).unwrap();

    engine.set_value("storage.database_path", json!(null)).unwrap();

    assert_eq!(engine.get_settings().storage.database_path, None);
}

#[test]
fn test_reset_restores_defaults() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.set_value("appearance.theme", json!("Light")).unwrap();
    engine.set_value("logging.filter", json!("smartweb=debug")).unwrap();

    engine.reset().unwrap();
    assert_eq!(*engine.get_settings(), AppSettings::default());

    let mut reread = engine_in_temp(&dir);
    assert_eq!(reread.load().unwrap(), AppSettings::default());
}

#[test]
fn test_unknown_keys_are_rejected() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    for key in ["", "appearance.accent", "nope", "nope.theme"] {
        let result = engine.set_value(key, json!("x"));
        assert!(
            matches!(result, Err(SettingsError::InvalidKey(_))),
            "key {:?} should be rejected, got {:?}",
            key,
            result
        );
    }
}

#[test]
fn test_invalid_value_is_rejected_and_not_applied() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let result = engine.set_value("appearance.theme", json!("Purple"));

    assert!(matches!(result, Err(SettingsError::InvalidValue(_))));
    assert_eq!(engine.get_settings().appearance.theme, ThemeMode::System);
    assert!(
        !dir.path().join("settings.json").exists(),
        "a rejected value must not be saved"
    );
}

#[test]
fn test_malformed_file_is_a_serialization_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("settings.json"), "{ not json").unwrap();
    let mut engine = engine_in_temp(&dir);

    let result = engine.load();

    assert!(matches!(result, Err(SettingsError::SerializationError(_))));
    assert_eq!(*engine.get_settings(), AppSettings::default());
}

#[test]
fn test_save_creates_missing_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("a").join("b").join("settings.json");
    let engine = SettingsEngine::new(Some(path.to_string_lossy().to_string()));

    engine.save().unwrap();

    assert!(path.exists());
    assert_eq!(engine.get_config_path(), path.to_string_lossy());
}
