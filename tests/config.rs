use almanac::config::Config;
use almanac::constants::{DEFAULT_INPUT_PATTERN, DEFAULT_TARGET_ZONE};
use chrono::NaiveDate;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.display.input_pattern, "dd-MM-yyyy");
    assert_eq!(config.display.output_pattern, "yyyy/MM/dd");
    assert_eq!(config.display.target_zone, "Europe/Moscow");
    assert_eq!(config.display.weekday_language, "ru");
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.demo.birth_date, NaiveDate::from_ymd_opt(1995, 5, 23).unwrap());
    assert_eq!(config.demo.calendar_month, 1);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Unknown zone should fail
    config.display.target_zone = "Atlantis/Capital".to_string();
    assert!(config.validate().is_err());

    // Reset and test invalid month
    config.display.target_zone = DEFAULT_TARGET_ZONE.to_string();
    config.demo.calendar_month = 13;
    assert!(config.validate().is_err());
}

#[test]
fn test_config_validation_rejects_bad_display_values() {
    let mut config = Config::default();
    config.display.input_pattern = "dd-QQ-yyyy".to_string();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.display.locale = "xx".to_string();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.display.weekday_language = "tlh".to_string();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.display.time_format = "%H:%Q".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_validation_rejects_bad_demo_values() {
    let mut config = Config::default();
    config.demo.first_date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.demo.date_text = "2024/01/15".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_validation_log_level() {
    let mut config = Config::default();
    config.logging.level = "chatty".to_string();
    // ignored while logging is disabled
    assert!(config.validate().is_ok());

    config.logging.enabled = true;
    assert!(config.validate().is_err());

    config.logging.level = "debug".to_string();
    assert!(config.validate().is_ok());
    assert_eq!(config.logging.level_filter().unwrap(), log::LevelFilter::Debug);
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("input_pattern = \"dd-MM-yyyy\""));
    assert!(toml_str.contains("target_zone = \"Europe/Moscow\""));
    assert!(toml_str.contains("birth_date = \"1995-05-23\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[display]
target_zone = "Asia/Tokyo"

[logging]
enabled = true

[demo]
birth_date = "2000-02-29"
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.display.target_zone, "Asia/Tokyo");
    assert!(config.logging.enabled);
    assert_eq!(config.demo.birth_date, NaiveDate::from_ymd_opt(2000, 2, 29).unwrap());

    // Check that unspecified values use defaults
    assert_eq!(config.display.input_pattern, DEFAULT_INPUT_PATTERN);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.demo.advance_days, 10);
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_config_deserialization() {
    // Test that empty TOML uses all defaults
    let empty_toml = "";
    let config: Config = toml::from_str(empty_toml).unwrap();
    let default_config = Config::default();

    assert_eq!(config.display.input_pattern, default_config.display.input_pattern);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
    assert_eq!(config.demo.event, default_config.demo.event);
}

#[test]
fn test_load_from_file_round_trip() {
    use std::fs;

    let temp_dir = std::env::temp_dir().join("almanac_test_load_config");
    let _ = fs::remove_dir_all(&temp_dir);
    let config_path = temp_dir.join("config.toml");

    Config::generate_default_config(&config_path).unwrap();
    let loaded = Config::load_from_file(&config_path).unwrap();
    let default_config = Config::default();

    assert_eq!(loaded.display.output_pattern, default_config.display.output_pattern);
    assert_eq!(loaded.display.time_format, "%H:%M:%S");
    assert_eq!(loaded.display.source_zone, "UTC");
    assert_eq!(loaded.demo.work_start, default_config.demo.work_start);
    assert_eq!(loaded.demo.work_end, default_config.demo.work_end);

    let _ = fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_load_from_file_rejects_invalid_values() {
    use std::fs;

    let temp_dir = std::env::temp_dir().join("almanac_test_invalid_config");
    let _ = fs::remove_dir_all(&temp_dir);
    fs::create_dir_all(&temp_dir).unwrap();
    let config_path = temp_dir.join("config.toml");
    fs::write(&config_path, "[display]\nlocale = \"zz\"\n").unwrap();

    assert!(Config::load_from_file(&config_path).is_err());
    assert!(Config::load_from_file(temp_dir.join("missing.toml")).is_err());

    let _ = fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    // Create a temporary path that doesn't exist
    let temp_dir = std::env::temp_dir().join("almanac_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    // Ensure the directory doesn't exist initially
    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    // Generate config should create the directory structure
    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());

    // Verify the directory was created
    assert!(config_path.parent().unwrap().exists());
    assert!(config_path.exists());

    // Verify the file contains expected content
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# almanac configuration file"));
    assert!(content.contains("output_pattern = \"yyyy/MM/dd\""));

    // Clean up
    let _ = fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_default_config_path_is_under_app_dir() {
    if let Ok(path) = Config::get_default_config_path() {
        assert!(path.ends_with("almanac/config.toml"));
        assert_eq!(path.parent().unwrap(), Config::get_xdg_config_dir().unwrap());
    }
}
