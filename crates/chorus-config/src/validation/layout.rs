//! Layout section validation.

use crate::schema::ChorusConfig;

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &ChorusConfig) {
    let layout = &config.layout;
    validate_range(
        errors,
        "layout.reserved_chrome_height",
        layout.reserved_chrome_height,
        0,
        2000,
    );
    validate_range_f64(errors, "layout.default_zoom", layout.default_zoom, 0.25, 5.0);
    validate_range(
        errors,
        "layout.resize_debounce_ms",
        layout.resize_debounce_ms,
        0,
        5000,
    );
    validate_range(errors, "layout.max_panes", layout.max_panes, 1, 12);
}
