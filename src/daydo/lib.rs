//! # Daydo Architecture
//!
//! Daydo is a **UI-agnostic daily task list core**. Tasks are entered,
//! checked off, reordered, and deleted; the list resets at the start of each
//! new day, except tasks flagged permanent, which survive the reset
//! unchecked. Any presentation layer (desktop, web, TUI) sits on top and
//! talks only to [`tasks::TaskStore`].
//!
//! ## The Layer Split
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Presentation (external, not in this crate)                 │
//! │  - Renders the collection, forwards user intents            │
//! │  - Owns transient UI state (drag index, edit mode)          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Task Store (tasks.rs)                                      │
//! │  - Owns the in-memory collection and the rollover rule      │
//! │  - Serializes/deserializes; persists after every mutation   │
//! └─────────────────────────────────────────────────────────────┘
//!                   │                        │
//!                   ▼                        ▼
//! ┌──────────────────────────┐  ┌──────────────────────────────┐
//! │  Date Service (date.rs)  │  │  Storage (store/)            │
//! │  - Day key + label       │  │  - StorageBackend trait      │
//! └──────────────────────────┘  │  - FsBackend, MemBackend     │
//!                               └──────────────────────────────┘
//! ```
//!
//! ## Key Principle: Persistence Never Interrupts the User
//!
//! Storage is best-effort. A backend failure on read degrades to "absent";
//! a failure on write is logged and the in-memory state stays authoritative
//! for the session. The only loud error in the whole crate is an
//! out-of-bounds reorder, which signals that the caller's index space has
//! desynchronized from the store's.
//!
//! ## Concurrency
//!
//! There is exactly one mutator: all operations take `&mut self` and the
//! crate uses no locks. Backends use `&self` with interior mutability so the
//! store can hold them by value.
//!
//! ## Module Overview
//!
//! - [`tasks`]: the task store — rollover reconciliation and all operations
//! - [`store`]: storage abstraction and the file/memory backends
//! - [`date`]: day keys, display labels, and the clock seam
//! - [`model`]: core data types ([`model::Task`], [`model::TaskId`])
//! - [`error`]: error types

pub mod date;
pub mod error;
pub mod model;
pub mod store;
pub mod tasks;
