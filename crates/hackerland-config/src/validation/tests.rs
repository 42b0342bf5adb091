//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = HackerlandConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_gap_too_large() {
    let mut config = HackerlandConfig::default();
    config.layout.gap = 250;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.gap"));
}

#[test]
fn catches_master_split_out_of_range() {
    let mut config = HackerlandConfig::default();
    config.layout.master_split = 0.95;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.master_split"));

    config.layout.master_split = 0.05;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.master_split"));
}

#[test]
fn master_split_bounds_are_inclusive() {
    let mut config = HackerlandConfig::default();
    config.layout.master_split = 0.1;
    assert!(validate(&config).is_ok());
    config.layout.master_split = 0.9;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_zero_speed() {
    let mut config = HackerlandConfig::default();
    config.animation.speed = 0.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("animation.speed"));
}

#[test]
fn speed_of_one_is_allowed() {
    let mut config = HackerlandConfig::default();
    config.animation.speed = 1.0;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_non_positive_tension_and_negative_friction() {
    let mut config = HackerlandConfig::default();
    config.animation.spring_tension = 0.0;
    config.animation.spring_friction = -1.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("animation.spring_tension"));
    assert!(err.contains("animation.spring_friction"));
}

#[test]
fn catches_nan_tension() {
    let mut config = HackerlandConfig::default();
    config.animation.spring_tension = f64::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("animation.spring_tension"));
}

#[test]
fn catches_tick_out_of_range() {
    let mut config = HackerlandConfig::default();
    config.animation.tick_ms = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("animation.tick_ms"));
}

#[test]
fn catches_workspace_count() {
    let mut config = HackerlandConfig::default();
    config.workspaces.count = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("workspaces.count"));

    config.workspaces.count = 11;
    assert!(validate(&config).is_err());
}

#[test]
fn catches_degenerate_drag_minimum() {
    let mut config = HackerlandConfig::default();
    config.drag.min_width = 0.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("drag.min_width"));
}

#[test]
fn catches_empty_socket_path() {
    let mut config = HackerlandConfig::default();
    config.ipc.socket_path = std::path::PathBuf::new();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("ipc.socket_path"));

    config.ipc.enabled = false;
    assert!(validate(&config).is_ok());
}

#[test]
fn collects_multiple_errors() {
    let mut config = HackerlandConfig::default();
    config.layout.gap = 500;
    config.bar.height = 500;
    config.workspaces.count = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.gap"));
    assert!(err.contains("bar.height"));
    assert!(err.contains("workspaces.count"));
}
