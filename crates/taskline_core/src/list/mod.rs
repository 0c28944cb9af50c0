//! Task list coordination.
//!
//! # Responsibility
//! - Hold the in-memory task collection presented to the UI.
//! - Mediate presentation intents into store operations.

pub mod task_list;
