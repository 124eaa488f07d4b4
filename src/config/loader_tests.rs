use super::*;

use std::fs;

use tempfile::TempDir;

#[test]
fn load_from_path_parses_valid_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(LOCAL_CONFIG_NAME);
    fs::write(&path, "[thresholds]\nmax_file_lines = 150\n").unwrap();

    let config = FileConfigLoader::new().load_from_path(&path).unwrap();
    assert_eq!(config.thresholds.max_file_lines, 150);
}

#[test]
fn load_from_missing_path_errors() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");
    let err = FileConfigLoader::new().load_from_path(&path).unwrap_err();
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn load_from_path_rejects_invalid_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(LOCAL_CONFIG_NAME);
    fs::write(&path, "not [ valid toml").unwrap();

    assert!(FileConfigLoader::new().load_from_path(&path).is_err());
}

#[test]
fn load_from_path_rejects_semantically_invalid_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(LOCAL_CONFIG_NAME);
    fs::write(&path, "[thresholds]\nmax_params = 0\n").unwrap();

    assert!(FileConfigLoader::new().load_from_path(&path).is_err());
}

#[test]
fn template_round_trips_through_parser() {
    let config: Config = toml::from_str(&config_template()).unwrap();
    assert_eq!(config, Config::default());
    assert!(config.validate().is_ok());
}
