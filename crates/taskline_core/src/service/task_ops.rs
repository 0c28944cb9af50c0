//! Task use-case operations.
//!
//! Five independent wrappers, one per user intent. Each borrows the store
//! at construction and exposes exactly one `execute` method that delegates
//! to the persistence boundary. Store errors propagate unchanged; no
//! operation retries, batches, or validates input.

use crate::model::task::{Task, TaskId};
use crate::store::task_store::{StoreResult, TaskStore};

/// Lists every persisted task.
pub struct FetchTasks<'s, S: TaskStore> {
    store: &'s S,
}

impl<'s, S: TaskStore> FetchTasks<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    pub fn execute(&self) -> StoreResult<Vec<Task>> {
        self.store.fetch_all()
    }
}

/// Creates a new pending task from free-text input.
pub struct AddTask<'s, S: TaskStore> {
    store: &'s S,
}

impl<'s, S: TaskStore> AddTask<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    pub fn execute(&self, title: &str) -> StoreResult<TaskId> {
        self.store.add(title)
    }
}

/// Permanently deletes one task.
pub struct DeleteTask<'s, S: TaskStore> {
    store: &'s S,
}

impl<'s, S: TaskStore> DeleteTask<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    pub fn execute(&self, task: &Task) -> StoreResult<()> {
        self.store.remove(task)
    }
}

/// Flips one task's completion flag.
///
/// Mutates the passed-in entity directly and commits the edit; this path
/// never goes through add/remove.
pub struct ToggleCompletion<'s, S: TaskStore> {
    store: &'s S,
}

impl<'s, S: TaskStore> ToggleCompletion<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    pub fn execute(&self, task: &mut Task) -> StoreResult<()> {
        task.toggle_completion();
        self.store.stage(task);
        self.store.commit()
    }
}

/// Replaces one task's title.
///
/// Mutates the passed-in entity directly and commits the edit.
pub struct RenameTask<'s, S: TaskStore> {
    store: &'s S,
}

impl<'s, S: TaskStore> RenameTask<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    pub fn execute(&self, task: &mut Task, new_title: &str) -> StoreResult<()> {
        task.rename(new_title);
        self.store.stage(task);
        self.store.commit()
    }
}
