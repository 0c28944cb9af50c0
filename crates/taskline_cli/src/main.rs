//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskline_core` wiring.
//! - Act as the composition root: construct db, store, and coordinator
//!   explicitly and pass references down.
//! - Keep output deterministic for quick local sanity checks.

use std::error::Error;
use std::process::ExitCode;

use taskline_core::db::open_db_in_memory;
use taskline_core::{SqliteTaskStore, TaskListCoordinator};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("taskline_cli error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    println!("taskline_core version={}", taskline_core::core_version());

    let conn = open_db_in_memory()?;
    let store = SqliteTaskStore::try_new(&conn)?;
    let mut list = TaskListCoordinator::new(store);

    let milk = list.add("Buy milk")?;
    let rust = list.add("Learn Rust")?;
    list.toggle(milk)?;
    list.rename(rust, "Learn more Rust")?;

    println!(
        "tasks total={} completed={} pending={}",
        list.total_count(),
        list.completed_count(),
        list.pending().len()
    );
    for task in list.tasks() {
        let marker = if task.is_completed { "x" } else { " " };
        println!("[{marker}] {}", task.title);
    }

    list.delete(milk)?;
    println!("after delete total={}", list.total_count());

    Ok(())
}
