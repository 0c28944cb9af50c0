//! Core use-case operations.
//!
//! # Responsibility
//! - Wrap store calls into one-intent-per-type entry points.
//! - Keep presentation layers decoupled from storage details.

pub mod task_ops;
