//! Task list coordinator.
//!
//! # Responsibility
//! - Own the store and a transient copy of the task collection.
//! - Re-fetch the whole collection after every successful mutation.
//! - Notify the single subscriber exactly once per successful refresh.
//!
//! # Invariants
//! - A mutation either fully succeeds (one refresh, one notification) or
//!   fully fails (typed error returned, held collection untouched).
//! - Mutations are serialized through `&mut self`; no two can interleave.

use crate::model::task::{Task, TaskId};
use crate::service::task_ops::{AddTask, DeleteTask, FetchTasks, RenameTask, ToggleCompletion};
use crate::store::task_store::{StoreError, StoreResult, TaskStore};
use log::{error, info};

/// Zero-argument change hook fired after every successful refresh.
///
/// No payload is pushed; subscribers pull current state through the
/// accessor methods.
pub type ChangeListener = Box<dyn FnMut()>;

/// Mediates presentation intents into store operations and exposes the
/// current pending/completed partitions.
pub struct TaskListCoordinator<S: TaskStore> {
    store: S,
    tasks: Vec<Task>,
    on_change: Option<ChangeListener>,
}

impl<S: TaskStore> TaskListCoordinator<S> {
    /// Creates a coordinator with an empty held collection.
    pub fn new(store: S) -> Self {
        Self {
            store,
            tasks: Vec::new(),
            on_change: None,
        }
    }

    /// Registers the single change subscriber, replacing any previous one.
    pub fn set_on_change(&mut self, listener: impl FnMut() + 'static) {
        self.on_change = Some(Box::new(listener));
    }

    /// Replaces the held collection with the store's current contents and
    /// fires the change notification.
    ///
    /// On failure the previous collection stays untouched and no
    /// notification fires.
    pub fn refresh(&mut self) -> StoreResult<()> {
        match FetchTasks::new(&self.store).execute() {
            Ok(tasks) => {
                self.tasks = tasks;
                info!(
                    "event=task_refresh module=list status=ok total={}",
                    self.tasks.len()
                );
                self.notify();
                Ok(())
            }
            Err(err) => {
                error!("event=task_refresh module=list status=error error={err}");
                Err(err)
            }
        }
    }

    /// Creates a task from free-text input, then re-fetches the collection.
    pub fn add(&mut self, title: &str) -> StoreResult<TaskId> {
        let id = match AddTask::new(&self.store).execute(title) {
            Ok(id) => id,
            Err(err) => {
                error!("event=task_add module=list status=error error={err}");
                return Err(err);
            }
        };

        self.refresh()?;
        Ok(id)
    }

    /// Deletes the held task with the given id, then re-fetches.
    pub fn delete(&mut self, id: TaskId) -> StoreResult<()> {
        let task = self.held_task(id)?;
        if let Err(err) = DeleteTask::new(&self.store).execute(&task) {
            error!("event=task_delete module=list status=error error={err}");
            return Err(err);
        }

        self.refresh()
    }

    /// Flips the completion flag of the held task with the given id, then
    /// re-fetches.
    pub fn toggle(&mut self, id: TaskId) -> StoreResult<()> {
        let mut task = self.held_task(id)?;
        if let Err(err) = ToggleCompletion::new(&self.store).execute(&mut task) {
            error!("event=task_toggle module=list status=error error={err}");
            return Err(err);
        }

        self.refresh()
    }

    /// Renames the held task with the given id, then re-fetches.
    pub fn rename(&mut self, id: TaskId, new_title: &str) -> StoreResult<()> {
        let mut task = self.held_task(id)?;
        if let Err(err) = RenameTask::new(&self.store).execute(&mut task, new_title) {
            error!("event=task_rename module=list status=error error={err}");
            return Err(err);
        }

        self.refresh()
    }

    /// Returns the held collection as last fetched.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns held tasks that are not yet completed, recomputed per call.
    pub fn pending(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|task| task.is_pending()).collect()
    }

    /// Returns held tasks that are completed, recomputed per call.
    pub fn completed(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.is_completed)
            .collect()
    }

    /// Returns how many held tasks are completed.
    pub fn completed_count(&self) -> usize {
        self.completed().len()
    }

    /// Returns the total number of held tasks.
    pub fn total_count(&self) -> usize {
        self.tasks.len()
    }

    fn held_task(&self, id: TaskId) -> StoreResult<Task> {
        self.tasks
            .iter()
            .find(|task| task.uuid == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn notify(&mut self) {
        if let Some(listener) = self.on_change.as_mut() {
            listener();
        }
    }
}
