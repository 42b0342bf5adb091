//! Tests for the config file watcher.

use super::config_watcher::{debounce_signals, is_config_event};
use super::*;
use notify::event::{CreateKind, ModifyKind, RemoveKind};
use notify::{Event, EventKind};
use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};

#[test]
fn watcher_new_with_nonexistent_path_succeeds() {
    let watcher = ConfigWatcher::new(PathBuf::from("/tmp/nonexistent_hackerland_test.toml"));
    assert!(watcher.is_ok());
}

#[test]
fn watcher_new_with_existing_path_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "# test").unwrap();

    let watcher = ConfigWatcher::new(path.clone()).unwrap();
    assert_eq!(watcher.path(), path.as_path());
}

#[test]
fn watcher_rejects_path_without_file_name() {
    assert!(ConfigWatcher::new(PathBuf::from("/")).is_err());
}

#[test]
fn only_modify_and_create_of_our_file_count() {
    let name = OsString::from("config.toml");
    let ours = PathBuf::from("/home/u/.config/hackerland/config.toml");
    let other = PathBuf::from("/home/u/.config/hackerland/config.toml.swp");

    let modify = Event::new(EventKind::Modify(ModifyKind::Any)).add_path(ours.clone());
    let create = Event::new(EventKind::Create(CreateKind::File)).add_path(ours.clone());
    let remove = Event::new(EventKind::Remove(RemoveKind::File)).add_path(ours);
    let swap = Event::new(EventKind::Modify(ModifyKind::Any)).add_path(other);

    assert!(is_config_event(&modify, &name));
    assert!(is_config_event(&create, &name));
    assert!(!is_config_event(&remove, &name));
    assert!(!is_config_event(&swap, &name));
}

#[tokio::test]
async fn burst_of_changes_becomes_one_signal() {
    let (notify_tx, notify_rx) = mpsc::channel(16);
    let (tx, mut rx) = broadcast::channel(4);

    let task = tokio::spawn(debounce_signals(notify_rx, Duration::from_millis(50), tx));

    for _ in 0..5 {
        notify_tx.send(()).await.unwrap();
    }
    tokio::time::sleep(Duration::from_millis(150)).await;
    drop(notify_tx);
    task.await.unwrap();

    assert!(rx.try_recv().is_ok());
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn separate_bursts_produce_separate_signals() {
    let (notify_tx, notify_rx) = mpsc::channel(16);
    let (tx, mut rx) = broadcast::channel(4);

    let task = tokio::spawn(debounce_signals(notify_rx, Duration::from_millis(30), tx));

    notify_tx.send(()).await.unwrap();
    tokio::time::sleep(Duration::from_millis(120)).await;
    notify_tx.send(()).await.unwrap();
    tokio::time::sleep(Duration::from_millis(120)).await;
    drop(notify_tx);
    task.await.unwrap();

    assert!(rx.try_recv().is_ok());
    assert!(rx.try_recv().is_ok());
    assert!(rx.try_recv().is_err());
}
