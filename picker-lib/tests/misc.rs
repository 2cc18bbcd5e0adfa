use std::time::{Duration, Instant};

use picker_lib::debounce::{Debounce, NAVIGATION_WINDOW};
use picker_lib::{ConfigError, PickerConfig};

#[test]
fn test_debounce_suppresses_within_window() {
    let start = Instant::now();
    let mut debounce = Debounce::new(Duration::from_millis(500));
    assert!(debounce.should_fire(start));
    assert!(!debounce.should_fire(start + Duration::from_millis(100)));
    assert!(!debounce.should_fire(start + Duration::from_millis(499)));
    assert!(debounce.should_fire(start + Duration::from_millis(500)));
}

#[test]
fn test_debounce_reset() {
    let start = Instant::now();
    let mut debounce = Debounce::default();
    assert_eq!(debounce.window(), NAVIGATION_WINDOW);
    assert!(debounce.should_fire(start));
    debounce.reset();
    assert!(debounce.should_fire(start));
}

#[test]
fn test_config_defaults() {
    let config = PickerConfig::default();
    assert_eq!(config.indent_px, 20);
    assert_eq!(config.icons.group, "corporate-fare");
    assert_eq!(config.icons.leaf, "person");
}

#[test]
fn test_config_partial_json() {
    let config = PickerConfig::from_json(r#"{"icons": {"leaf": "account"}}"#).unwrap();
    assert_eq!(config.indent_px, 20);
    assert_eq!(config.icons.leaf, "account");
    assert_eq!(config.icons.group, "corporate-fare");
}

#[test]
fn test_config_invalid_json() {
    assert!(matches!(
        PickerConfig::from_json("{indent_px: }"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_config_missing_file() {
    let err = PickerConfig::load("/nonexistent/picker.json").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/picker.json"));
}
