//! End-to-end tests driving the task store over real files.

use chrono::NaiveDate;
use daydo::date::FixedClock;
use daydo::store::fs::FsBackend;
use daydo::store::{StorageBackend, KEY_LAST_DATE, KEY_TASKS};
use daydo::tasks::TaskStore;
use std::fs;
use tempfile::TempDir;

fn clock(y: i32, m: u32, d: u32) -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn backend(dir: &TempDir) -> FsBackend {
    FsBackend::new(dir.path().to_path_buf())
}

#[test]
fn two_day_scenario_over_real_files() {
    let dir = TempDir::new().unwrap();

    // Day 1: add, flag, complete.
    let mut store = TaskStore::open(backend(&dir), clock(2024, 5, 1));
    let wash = store.add_task("wash car", false).unwrap();
    store.add_task("water plants", true).unwrap();
    store.toggle_task(wash);
    drop(store);

    assert_eq!(
        fs::read_to_string(dir.path().join(KEY_LAST_DATE)).unwrap(),
        "2024-05-01"
    );

    // Day 2: fresh process, rollover applies.
    let store = TaskStore::open(backend(&dir), clock(2024, 5, 2));
    assert_eq!(store.len(), 1);
    assert_eq!(store.tasks()[0].text, "water plants");
    assert!(!store.tasks()[0].completed);
    assert!(store.tasks()[0].permanent);
    assert_eq!(
        fs::read_to_string(dir.path().join(KEY_LAST_DATE)).unwrap(),
        "2024-05-02"
    );
}

#[test]
fn same_day_restart_preserves_order_and_completion() {
    let dir = TempDir::new().unwrap();

    let mut store = TaskStore::open(backend(&dir), clock(2024, 5, 1));
    for text in ["a", "b", "c"] {
        store.add_task(text, false).unwrap();
    }
    store.reorder_task(2, 0).unwrap();
    store.commit_order();
    let first = store.tasks()[0].id;
    store.toggle_task(first);
    drop(store);

    let store = TaskStore::open(backend(&dir), clock(2024, 5, 1));
    let texts: Vec<&str> = store.tasks().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["c", "a", "b"]);
    assert!(store.tasks()[0].completed);
}

#[test]
fn corrupt_tasks_file_degrades_to_empty() {
    let dir = TempDir::new().unwrap();

    let store_backend = backend(&dir);
    store_backend.set(KEY_TASKS, "not json at all").unwrap();
    store_backend.set(KEY_LAST_DATE, "2024-05-01").unwrap();

    let mut store = TaskStore::open(store_backend, clock(2024, 5, 1));
    assert!(store.is_empty());

    // The store is fully usable after recovery.
    store.add_task("start over", false).unwrap();
    drop(store);

    let store = TaskStore::open(backend(&dir), clock(2024, 5, 1));
    assert_eq!(store.len(), 1);
    assert_eq!(store.tasks()[0].text, "start over");
}

#[test]
fn user_name_lives_in_its_own_file() {
    let dir = TempDir::new().unwrap();

    let mut store = TaskStore::open(backend(&dir), clock(2024, 5, 1));
    store.set_user_name("Ada");
    drop(store);

    assert_eq!(
        fs::read_to_string(dir.path().join("todo-user-name")).unwrap(),
        "Ada"
    );

    // Rollover to a new day rewrites tasks and date but not the name.
    let store = TaskStore::open(backend(&dir), clock(2024, 5, 2));
    assert_eq!(store.user_name(), "Ada");
}
