//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

fn error_of(config: &ChorusConfig) -> String {
    validate(config).unwrap_err().to_string()
}

#[test]
fn default_config_validates() {
    assert!(validate(&ChorusConfig::default()).is_ok());
}

#[test]
fn catches_chrome_height_too_large() {
    let mut config = ChorusConfig::default();
    config.layout.reserved_chrome_height = 2001;
    assert!(error_of(&config).contains("layout.reserved_chrome_height"));
}

#[test]
fn zero_chrome_height_is_allowed() {
    let mut config = ChorusConfig::default();
    config.layout.reserved_chrome_height = 0;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_zoom_out_of_range() {
    let mut config = ChorusConfig::default();
    config.layout.default_zoom = 0.1;
    assert!(error_of(&config).contains("layout.default_zoom"));
    config.layout.default_zoom = 6.0;
    assert!(error_of(&config).contains("layout.default_zoom"));
}

#[test]
fn catches_nan_zoom() {
    let mut config = ChorusConfig::default();
    config.layout.default_zoom = f64::NAN;
    assert!(error_of(&config).contains("layout.default_zoom"));
}

#[test]
fn catches_debounce_too_long() {
    let mut config = ChorusConfig::default();
    config.layout.resize_debounce_ms = 10_000;
    assert!(error_of(&config).contains("layout.resize_debounce_ms"));
}

#[test]
fn catches_max_panes_zero() {
    let mut config = ChorusConfig::default();
    config.layout.max_panes = 0;
    assert!(error_of(&config).contains("layout.max_panes"));
}

#[test]
fn catches_tiny_window() {
    let mut config = ChorusConfig::default();
    config.window.width = 100;
    assert!(error_of(&config).contains("window.width"));
}

#[test]
fn catches_http_startup_url() {
    let mut config = ChorusConfig::default();
    config.providers.startup = vec!["http://chatgpt.com".into()];
    let err = error_of(&config);
    assert!(err.contains("providers.startup[0]"));
    assert!(err.contains("https://"));
}

#[test]
fn catches_startup_url_without_host() {
    let mut config = ChorusConfig::default();
    config.providers.startup = vec!["https:///path".into()];
    assert!(error_of(&config).contains("providers.startup[0]"));
}

#[test]
fn catches_more_startup_urls_than_max_panes() {
    let mut config = ChorusConfig::default();
    config.layout.max_panes = 1;
    let err = error_of(&config);
    assert!(err.contains("providers.startup has 2 entries"));
}

#[test]
fn empty_startup_is_allowed() {
    let mut config = ChorusConfig::default();
    config.providers.startup.clear();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_duplicate_catalog_names() {
    let mut config = ChorusConfig::default();
    config.providers.catalog.push(ProviderEntry {
        name: "Claude".into(),
        url: "https://claude.ai/new".into(),
    });
    assert!(error_of(&config).contains("is a duplicate"));
}

#[test]
fn catches_empty_catalog_name() {
    let mut config = ChorusConfig::default();
    config.providers.catalog[0].name = "  ".into();
    assert!(error_of(&config).contains("providers.catalog[0].name is empty"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = ChorusConfig::default();
    config.layout.max_panes = 0;
    config.layout.default_zoom = 10.0;
    config.window.height = 1;
    let err = error_of(&config);
    assert!(err.contains("layout.max_panes"));
    assert!(err.contains("layout.default_zoom"));
    assert!(err.contains("window.height"));
    assert_eq!(err.matches("; ").count() + 1, 4, "{err}");
}
