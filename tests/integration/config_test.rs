use std::fs;
use sysprobe::core::health::DEFAULT_UNHEALTHY_THRESHOLD;
use sysprobe::core::pages::PollIntervals;
use sysprobe::{Config, HealthSettings};
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.unhealthy_threshold, DEFAULT_UNHEALTHY_THRESHOLD);
    assert_eq!(config.quick_poll_secs, 5);
    assert_eq!(config.bridge_ready_timeout_ms, 5000);
    assert!(!config.debug);
}

#[test]
fn test_config_load_missing_file_returns_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_config_load_empty_file_returns_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, "  \n").unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_config_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config.set("unhealthy_threshold", "3").unwrap();
    config.set("disk_path", "/srv").unwrap();
    config.set("debug", "true").unwrap();
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.unhealthy_threshold, 3);
    assert_eq!(loaded.disk_path, "/srv");
}

#[test]
fn test_config_partial_file_fills_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, r#"{"health_poll_secs": 20}"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.health_poll_secs, 20);
    assert_eq!(config.quick_poll_secs, 5);
}

#[test]
fn test_config_invalid_json_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, "{ unhealthy_threshold: ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config file"));
}

#[test]
fn test_config_rejects_invalid_values_on_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, r#"{"quick_poll_secs": 0}"#).unwrap();

    assert!(Config::load_from(&path).is_err());
}

#[test]
fn test_config_feeds_settings_and_intervals() {
    let config = Config {
        cpu_sample_ms: 500,
        system_info_poll_secs: 60,
        ..Default::default()
    };

    let settings = HealthSettings::from(&config);
    assert_eq!(settings.cpu_sample, Duration::from_millis(500));
    assert_eq!(settings.unhealthy_threshold, 2);

    let intervals = PollIntervals::from(&config);
    assert_eq!(intervals.system_info, Duration::from_secs(60));
    assert_eq!(intervals.health, Duration::from_secs(10));
}
