//! Tests for the reload manager.

use super::*;
use crate::schema::{HackerlandConfig, LayoutMode};
use std::path::PathBuf;

#[tokio::test]
async fn start_with_nonexistent_path_uses_defaults() {
    let path = PathBuf::from("/tmp/nonexistent_hackerland_reload_test.toml");
    let (config, rx) = ReloadManager::start(path).await;
    assert_eq!(config, HackerlandConfig::default());
    assert_eq!(*rx.borrow(), HackerlandConfig::default());
}

#[tokio::test]
async fn start_with_valid_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[layout]
mode = "grid"
"#,
    )
    .unwrap();

    let (config, _rx) = ReloadManager::start(path).await;
    assert_eq!(config.layout.mode, LayoutMode::Grid);
    assert_eq!(config.layout.gap, 10); // default
}

#[test]
fn reload_rejects_out_of_range_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[workspaces]\ncount = 0\n").unwrap();

    let manager = ReloadManager::for_path(path);
    assert!(manager.reload_config().is_err());
}

#[test]
fn reload_accepts_valid_edit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[layout]\nmaster_split = 0.6\n").unwrap();

    let manager = ReloadManager::for_path(path);
    let config = manager.reload_config().unwrap();
    assert!((config.layout.master_split - 0.6).abs() < f64::EPSILON);
}
