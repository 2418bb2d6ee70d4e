//! # Storage Layer
//!
//! This module defines the persistence adapter for daydo. The
//! [`StorageBackend`] trait is a plain string key/value contract: values are
//! opaque to the backend, and the [`crate::tasks::TaskStore`] owns all
//! serialization.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with [`memory::MemBackend`] (no filesystem needed)
//! - Allow **alternate backends** (browser-local, networked) without touching
//!   the rollover logic
//! - Keep the task engine **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FsBackend`]: production file-based storage, one file per key under
//!   a caller-supplied directory, atomic writes.
//! - [`memory::MemBackend`]: in-memory storage for tests, with optional write
//!   failure simulation.
//!
//! ## Persisted keys
//!
//! ```text
//! todo-last-date   # last reconciled day key, YYYY-MM-DD
//! todo-tasks       # JSON array of tasks, array order = display order
//! todo-user-name   # raw display-name string
//! ```

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Key under which the last reconciled day key is stored.
pub const KEY_LAST_DATE: &str = "todo-last-date";
/// Key under which the serialized task collection is stored.
pub const KEY_TASKS: &str = "todo-tasks";
/// Key under which the user's display name is stored.
pub const KEY_USER_NAME: &str = "todo-user-name";

/// Abstract interface for durable key/value storage.
///
/// Methods take `&self`; implementations use interior mutability where they
/// need it, since there is exactly one mutator (see the crate doc).
pub trait StorageBackend {
    /// Read the value stored under `key`. `Ok(None)` means absent; `Err` is
    /// reserved for actual storage failures (permissions, disk failure).
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Durably store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
