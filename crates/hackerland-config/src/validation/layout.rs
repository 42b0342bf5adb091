//! Layout and bar validation (gaps, padding, borders, split ratio).

use crate::schema::HackerlandConfig;

use super::helpers::validate_range;

/// Validate all layout-related constraints.
pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &HackerlandConfig) {
    validate_range(errors, "layout.gap", config.layout.gap, 0, 100);
    validate_range(
        errors,
        "layout.outer_padding",
        config.layout.outer_padding,
        0,
        200,
    );
    validate_range(
        errors,
        "layout.border_width",
        config.layout.border_width,
        0,
        20,
    );
    validate_range(
        errors,
        "layout.master_split",
        config.layout.master_split,
        0.1,
        0.9,
    );
    validate_range(errors, "bar.height", config.bar.height, 0, 200);
}
