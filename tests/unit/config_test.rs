//! Client configuration file

use tempfile::TempDir;
use teamgrade::api::ConfigError;
use teamgrade::config::ClientConfig;

#[test]
fn test_save_and_load_round_trip() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("conf").join("config.toml");
    let config = ClientConfig {
        api_url: Some("https://grading.example.org/api/".to_string()),
        timeout_secs: Some(30),
        session_file: Some(temp.path().join("session.toml")),
    };

    config.save_to(&path).unwrap();
    let loaded = ClientConfig::load_from(&path).unwrap();

    assert_eq!(loaded, config);
    assert_eq!(loaded.timeout(), Some(std::time::Duration::from_secs(30)));
    assert_eq!(loaded.session_path(), temp.path().join("session.toml"));
}

#[test]
fn test_missing_fields_default() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "api_url = \"http://localhost:5281\"\n").unwrap();

    let config = ClientConfig::load_from(&path).unwrap();

    assert_eq!(config.resolved_api_url(None).unwrap(), "http://localhost:5281");
    assert_eq!(config.timeout(), None);
}

#[test]
fn test_load_from_reports_parse_errors() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "api_url = ").unwrap();

    let err = ClientConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().starts_with("failed to parse"));
}

#[test]
fn test_load_from_reports_missing_file() {
    let temp = TempDir::new().unwrap();

    let err = ClientConfig::load_from(&temp.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn test_unset_url_is_missing() {
    let err = ClientConfig::default().resolved_api_url(None).unwrap_err();
    assert_eq!(err.to_string(), "API URL is not set");
}
