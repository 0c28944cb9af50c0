//! Task-list domain model.
//!
//! # Responsibility
//! - Define the canonical task record used by store and coordinator.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Deletion is permanent; there are no tombstones or versioning.

pub mod task;
