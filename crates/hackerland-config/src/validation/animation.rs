//! Animation and drag validation.

use crate::schema::HackerlandConfig;

use super::helpers::{
    validate_above, validate_at_least, validate_range, validate_range_exclusive_min,
};

/// Validate animation constants.
pub(crate) fn validate_animation(errors: &mut Vec<String>, config: &HackerlandConfig) {
    let animation = &config.animation;
    validate_range_exclusive_min(errors, "animation.speed", animation.speed, 0.0, 1.0);
    validate_above(
        errors,
        "animation.spring_tension",
        animation.spring_tension,
        0.0,
    );
    validate_at_least(
        errors,
        "animation.spring_friction",
        animation.spring_friction,
        0.0,
    );
    validate_range_exclusive_min(errors, "animation.max_dt", animation.max_dt, 0.0, 1.0);
    validate_range(errors, "animation.tick_ms", animation.tick_ms, 1, 100);
}

/// Validate pointer drag limits.
pub(crate) fn validate_drag(errors: &mut Vec<String>, config: &HackerlandConfig) {
    validate_at_least(errors, "drag.min_width", config.drag.min_width, 1.0);
    validate_at_least(errors, "drag.min_height", config.drag.min_height, 1.0);
}
