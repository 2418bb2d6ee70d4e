//! # Task Store
//!
//! The rollover and persistence engine. `TaskStore` owns the in-memory task
//! collection for the life of the process and mediates every read and write
//! through a [`StorageBackend`].
//!
//! ## Rollover
//!
//! On open the store compares the last reconciled day key against today's.
//! If they differ (including first run), every completed non-permanent task
//! is dropped, every survivor is reset to uncompleted, and the result plus
//! today's key is written back. The date-equality guard makes the procedure
//! idempotent within a calendar day.
//!
//! ## Persistence failures
//!
//! Durability is best-effort: a failed write is logged and the in-memory
//! state stays authoritative for the session (the operation is not rolled
//! back). This keeps the user-facing flow uninterrupted when storage is
//! unavailable, at the cost of losing that session's changes on exit.

use crate::date::{self, Clock};
use crate::error::{DaydoError, Result};
use crate::model::{Task, TaskId};
use crate::store::{StorageBackend, KEY_LAST_DATE, KEY_TASKS, KEY_USER_NAME};
use chrono::NaiveDate;
use log::{debug, warn};

/// The daily task list engine, generic over storage and clock so tests can
/// substitute [`crate::store::memory::MemBackend`] and
/// [`crate::date::FixedClock`].
pub struct TaskStore<S: StorageBackend, C: Clock> {
    backend: S,
    clock: C,
    tasks: Vec<Task>,
    last_date: NaiveDate,
    user_name: String,
    next_id: u64,
}

impl<S: StorageBackend, C: Clock> TaskStore<S, C> {
    /// Load the stored state and reconcile it against today.
    ///
    /// Never fails: a storage read error or malformed stored value is
    /// treated as absent (logged), so the worst case is starting from an
    /// empty collection.
    pub fn open(backend: S, clock: C) -> Self {
        let today = clock.today();
        let stored_date = read_value(&backend, KEY_LAST_DATE)
            .as_deref()
            .and_then(date::parse_date_key);
        let stored_tasks = read_value(&backend, KEY_TASKS)
            .map(|json| decode_tasks(&json))
            .unwrap_or_default();
        let user_name = read_value(&backend, KEY_USER_NAME).unwrap_or_default();

        let crossed_day = stored_date != Some(today);
        let tasks = if crossed_day {
            debug!(
                "day boundary crossed ({:?} -> {}), applying rollover",
                stored_date, today
            );
            rollover(stored_tasks)
        } else {
            stored_tasks
        };

        let next_id = tasks.iter().map(|t| t.id.0).max().map_or(1, |max| max + 1);
        let store = Self {
            backend,
            clock,
            tasks,
            last_date: today,
            user_name,
            next_id,
        };

        if crossed_day {
            store.persist_tasks();
            store.persist_last_date();
        }

        store
    }

    /// Append a new uncompleted task. Whitespace-only text is rejected as a
    /// no-op; otherwise the text is stored verbatim.
    pub fn add_task(&mut self, text: &str, permanent: bool) -> Option<TaskId> {
        if text.trim().is_empty() {
            return None;
        }

        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(Task::new(id, text.to_string(), permanent));
        self.persist_tasks();
        Some(id)
    }

    /// Flip the completion flag of the task with `id`. Unknown ids are a
    /// silent no-op.
    pub fn toggle_task(&mut self, id: TaskId) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.completed = !task.completed;
            self.persist_tasks();
        }
    }

    /// Remove the task with `id`, preserving the relative order of the rest.
    /// Unknown ids are a silent no-op.
    pub fn delete_task(&mut self, id: TaskId) {
        if let Some(pos) = self.tasks.iter().position(|t| t.id == id) {
            self.tasks.remove(pos);
            self.persist_tasks();
        }
    }

    /// Move the task at `from` to `to`, shifting the tasks in between.
    ///
    /// This is the in-memory preview half of a drag gesture and does NOT
    /// persist; call [`Self::commit_order`] when the gesture ends.
    /// Out-of-bounds indexes mean the caller's index space has drifted from
    /// the store's, so they fail loudly instead of clamping.
    pub fn reorder_task(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.tasks.len();
        if from >= len || to >= len {
            return Err(DaydoError::IndexOutOfBounds { from, to, len });
        }

        let task = self.tasks.remove(from);
        self.tasks.insert(to, task);
        Ok(())
    }

    /// Persist the current order once, independent of how many preview moves
    /// the drag gesture produced.
    pub fn commit_order(&self) {
        self.persist_tasks();
    }

    /// Store the display name verbatim (empty is allowed). Independent of
    /// task persistence; never touched by rollover.
    pub fn set_user_name(&mut self, name: &str) {
        self.user_name = name.to_string();
        if let Err(err) = self.backend.set(KEY_USER_NAME, name) {
            warn!("failed to persist user name, keeping in-memory value: {err}");
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// The day this collection was last reconciled for.
    pub fn last_date(&self) -> NaiveDate {
        self.last_date
    }

    /// Display rendering of today's date, for the greeting header.
    pub fn today_label(&self) -> String {
        date::day_label(self.clock.today())
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Give the backend back, e.g. to reopen the store under a new day.
    pub fn into_backend(self) -> S {
        self.backend
    }

    fn persist_tasks(&self) {
        let json = match serde_json::to_string(&self.tasks) {
            Ok(json) => json,
            Err(err) => {
                warn!("failed to serialize tasks, skipping persist: {err}");
                return;
            }
        };
        if let Err(err) = self.backend.set(KEY_TASKS, &json) {
            warn!("failed to persist tasks, keeping in-memory state: {err}");
        }
    }

    fn persist_last_date(&self) {
        let key = date::date_key(self.last_date);
        if let Err(err) = self.backend.set(KEY_LAST_DATE, &key) {
            warn!("failed to persist last date: {err}");
        }
    }
}

/// The rollover rule: keep a task iff `!completed || permanent`, then reset
/// every survivor to uncompleted.
fn rollover(mut tasks: Vec<Task>) -> Vec<Task> {
    tasks.retain(|t| !t.completed || t.permanent);
    for task in &mut tasks {
        task.completed = false;
    }
    tasks
}

/// Read a raw stored value; storage failure reads as absent (logged).
fn read_value<S: StorageBackend>(backend: &S, key: &str) -> Option<String> {
    match backend.get(key) {
        Ok(value) => value,
        Err(err) => {
            warn!("failed to read {key}, treating as absent: {err}");
            None
        }
    }
}

/// Decode a stored task collection; malformed data reads as empty (logged).
fn decode_tasks(json: &str) -> Vec<Task> {
    match serde_json::from_str(json) {
        Ok(tasks) => tasks,
        Err(err) => {
            warn!("stored tasks are malformed, starting empty: {err}");
            Vec::new()
        }
    }
}
