//! Validation for the window and providers sections.

use crate::schema::ChorusConfig;

use super::helpers::{validate_https_url, validate_range};

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &ChorusConfig) {
    validate_range(errors, "window.width", config.window.width, 320, 16384);
    validate_range(errors, "window.height", config.window.height, 240, 16384);
}

/// Startup and catalog URLs must be https; catalog names must be unique
/// and non-empty since the prompt bar keys its buttons on them.
pub(crate) fn validate_providers(errors: &mut Vec<String>, config: &ChorusConfig) {
    let providers = &config.providers;

    if providers.startup.len() > config.layout.max_panes as usize {
        errors.push(format!(
            "providers.startup has {} entries but layout.max_panes is {}",
            providers.startup.len(),
            config.layout.max_panes
        ));
    }
    for (i, url) in providers.startup.iter().enumerate() {
        validate_https_url(errors, &format!("providers.startup[{i}]"), url);
    }

    let mut seen: Vec<&str> = Vec::new();
    for (i, entry) in providers.catalog.iter().enumerate() {
        let name = entry.name.trim();
        if name.is_empty() {
            errors.push(format!("providers.catalog[{i}].name is empty"));
        } else if seen.contains(&name) {
            errors.push(format!("providers.catalog[{i}].name {name:?} is a duplicate"));
        } else {
            seen.push(name);
        }
        validate_https_url(errors, &format!("providers.catalog[{i}].url"), &entry.url);
    }
}
