//! Task domain model.
//!
//! # Responsibility
//! - Define the persisted to-do record shared by store and coordinator.
//! - Provide mutation helpers for the toggle and rename use cases.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another task.
//! - `is_completed` starts as `false` at creation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every task record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Canonical record for one to-do item.
///
/// The title is deliberately unvalidated here: whether an empty title is
/// acceptable is a presentation concern, not a domain invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable global ID used for addressing tasks across refreshes.
    pub uuid: TaskId,
    /// Free-form display text.
    pub title: String,
    /// Completion flag driving the pending/completed partition.
    pub is_completed: bool,
}

impl Task {
    /// Creates a new pending task with a generated stable ID.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title)
    }

    /// Creates a task with a caller-provided stable ID.
    ///
    /// Used by tests and import paths where identity already exists.
    pub fn with_id(uuid: TaskId, title: impl Into<String>) -> Self {
        Self {
            uuid,
            title: title.into(),
            is_completed: false,
        }
    }

    /// Flips the completion flag in place.
    pub fn toggle_completion(&mut self) {
        self.is_completed = !self.is_completed;
    }

    /// Replaces the title in place.
    pub fn rename(&mut self, new_title: impl Into<String>) {
        self.title = new_title.into();
    }

    /// Returns whether this task belongs in the pending partition.
    pub fn is_pending(&self) -> bool {
        !self.is_completed
    }
}
