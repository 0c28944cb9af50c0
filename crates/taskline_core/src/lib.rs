//! Core domain logic for Taskline.
//! This crate is the single source of truth for task-list invariants.

pub mod db;
pub mod list;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use list::task_list::{ChangeListener, TaskListCoordinator};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskId};
pub use service::task_ops::{AddTask, DeleteTask, FetchTasks, RenameTask, ToggleCompletion};
pub use store::task_store::{SqliteTaskStore, StoreError, StoreResult, TaskStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
