use std::path::PathBuf;

use goalchat_client::config::{ClientConfig, DEFAULT_GATEWAY_URL, load_config, save_config};

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, ClientConfig::default());
    assert_eq!(config.gateway_url, DEFAULT_GATEWAY_URL);
}

#[test]
fn saved_config_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");
    let config = ClientConfig {
        gateway_url: "http://coach.internal:8080".to_string(),
        data_dir: Some(PathBuf::from("/var/lib/goalchat")),
        ..ClientConfig::default()
    };

    save_config(&path, &config).unwrap();
    assert_eq!(load_config(&path).unwrap(), config);
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn pre_versioned_config_is_migrated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"data_dir":"/tmp/goalchat"}"#).unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.gateway_url, DEFAULT_GATEWAY_URL);
    assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/goalchat")));
}

#[test]
fn newer_config_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"config_version":99,"gateway_url":"http://x"}"#).unwrap();

    assert!(load_config(&path).is_err());
}

#[test]
fn explicit_data_dir_wins_over_platform_default() {
    let config = ClientConfig {
        data_dir: Some(PathBuf::from("/srv/goalchat")),
        ..ClientConfig::default()
    };
    assert_eq!(
        config.resolve_data_dir().unwrap(),
        PathBuf::from("/srv/goalchat")
    );
}

#[test]
fn command_line_overrides_win_over_saved_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let saved = ClientConfig {
        gateway_url: "http://saved:3000".to_string(),
        data_dir: Some(PathBuf::from("/saved/data")),
        ..ClientConfig::default()
    };
    save_config(&path, &saved).unwrap();

    let effective = load_config(&path).unwrap().with_overrides(
        Some("http://flag:4000".to_string()),
        Some(PathBuf::from("/flag/data")),
    );
    assert_eq!(effective.gateway_url, "http://flag:4000");
    assert_eq!(effective.data_dir, Some(PathBuf::from("/flag/data")));
}

#[test]
fn absent_overrides_keep_saved_values() {
    let saved = ClientConfig {
        gateway_url: "http://saved:3000".to_string(),
        data_dir: Some(PathBuf::from("/saved/data")),
        ..ClientConfig::default()
    };

    assert_eq!(saved.clone().with_overrides(None, None), saved);

    let only_url = saved.clone().with_overrides(Some("http://flag:4000".to_string()), None);
    assert_eq!(only_url.gateway_url, "http://flag:4000");
    assert_eq!(only_url.data_dir, Some(PathBuf::from("/saved/data")));
}
