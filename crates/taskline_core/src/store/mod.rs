//! Persistence layer abstractions and the SQLite task store.
//!
//! # Responsibility
//! - Define the durable task-store contract used by operations and
//!   coordinator.
//! - Isolate SQLite query details from use-case orchestration.
//!
//! # Invariants
//! - The store exclusively owns durable task state; callers hold transient
//!   copies only.
//! - Store APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod task_store;
