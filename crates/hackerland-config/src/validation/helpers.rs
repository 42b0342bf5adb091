//! Shared range-validation helpers used by all domain validators.

use std::fmt::Display;

/// Push an error if `value` is outside `[min, max]`.
pub(crate) fn validate_range<T>(errors: &mut Vec<String>, name: &str, value: T, min: T, max: T)
where
    T: PartialOrd + Display + Copy,
{
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is outside `(min, max]`.
pub(crate) fn validate_range_exclusive_min(
    errors: &mut Vec<String>,
    name: &str,
    value: f64,
    min: f64,
    max: f64,
) {
    if value.is_nan() || value <= min || value > max {
        errors.push(format!("{name} = {value} is out of range ({min}, {max}]"));
    }
}

/// Push an error if `value` is not strictly greater than `min`.
pub(crate) fn validate_above(errors: &mut Vec<String>, name: &str, value: f64, min: f64) {
    if value.is_nan() || value <= min {
        errors.push(format!("{name} = {value} must be greater than {min}"));
    }
}

/// Push an error if `value` is below `min`.
pub(crate) fn validate_at_least(errors: &mut Vec<String>, name: &str, value: f64, min: f64) {
    if value.is_nan() || value < min {
        errors.push(format!("{name} = {value} must be at least {min}"));
    }
}
