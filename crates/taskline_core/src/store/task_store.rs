//! Task store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the canonical `tasks` storage.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Every mutating call commits independently; no transaction spans
//!   multiple calls.
//! - Read paths must reject invalid persisted state instead of masking it.
//! - Staged edits survive a failed commit so the caller can observe the
//!   error and retry.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::task::{Task, TaskId};
use rusqlite::{params, Connection, Row};
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const TASK_SELECT_SQL: &str = "SELECT uuid, title, is_completed FROM tasks";

const REQUIRED_COLUMNS: &[&str] = &["uuid", "title", "is_completed"];

pub type StoreResult<T> = Result<T, StoreError>;

/// Single error kind for task persistence and query operations.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    NotFound(TaskId),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted task data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; open it through taskline_core::db"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable persistence boundary for task records.
///
/// Edits to already-persisted tasks are made on detached copies, handed back
/// via [`stage`](TaskStore::stage), and flushed by
/// [`commit`](TaskStore::commit).
pub trait TaskStore {
    /// Returns every persisted task in store default order.
    fn fetch_all(&self) -> StoreResult<Vec<Task>>;
    /// Creates a pending task with the given title and commits.
    fn add(&self, title: &str) -> StoreResult<TaskId>;
    /// Permanently deletes the given task and commits.
    fn remove(&self, task: &Task) -> StoreResult<()>;
    /// Records an edited task as pending for the next commit.
    fn stage(&self, task: &Task);
    /// Flushes staged edits to durable storage; no-op when none are pending.
    fn commit(&self) -> StoreResult<()>;
}

/// SQLite-backed task store.
///
/// Single-threaded by construction: it borrows a `rusqlite::Connection`
/// (not `Sync`) and buffers staged edits in a `RefCell`.
pub struct SqliteTaskStore<'conn> {
    conn: &'conn Connection,
    dirty: RefCell<Vec<Task>>,
}

impl<'conn> SqliteTaskStore<'conn> {
    /// Creates a store after verifying the connection carries the expected
    /// schema.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `PRAGMA user_version` does not match
    ///   the latest migration.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the `tasks`
    ///   table shape is incomplete.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        verify_schema(conn)?;
        Ok(Self {
            conn,
            dirty: RefCell::new(Vec::new()),
        })
    }
}

impl TaskStore for SqliteTaskStore<'_> {
    fn fetch_all(&self) -> StoreResult<Vec<Task>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT_SQL} ORDER BY created_at ASC, uuid ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }

        Ok(tasks)
    }

    fn add(&self, title: &str) -> StoreResult<TaskId> {
        let task = Task::new(title);

        self.conn.execute(
            "INSERT INTO tasks (uuid, title, is_completed) VALUES (?1, ?2, ?3);",
            params![
                task.uuid.to_string(),
                task.title.as_str(),
                bool_to_int(task.is_completed),
            ],
        )?;
        self.commit()?;

        Ok(task.uuid)
    }

    fn remove(&self, task: &Task) -> StoreResult<()> {
        // A staged edit for a removed task must not resurrect it.
        self.dirty
            .borrow_mut()
            .retain(|pending| pending.uuid != task.uuid);

        let changed = self
            .conn
            .execute("DELETE FROM tasks WHERE uuid = ?1;", [task.uuid.to_string()])?;
        if changed == 0 {
            return Err(StoreError::NotFound(task.uuid));
        }

        self.commit()
    }

    fn stage(&self, task: &Task) {
        let mut dirty = self.dirty.borrow_mut();
        if let Some(pending) = dirty.iter_mut().find(|pending| pending.uuid == task.uuid) {
            *pending = task.clone();
        } else {
            dirty.push(task.clone());
        }
    }

    fn commit(&self) -> StoreResult<()> {
        if self.dirty.borrow().is_empty() {
            return Ok(());
        }

        let tx = self.conn.unchecked_transaction()?;
        for task in self.dirty.borrow().iter() {
            let changed = tx.execute(
                "UPDATE tasks
                 SET
                    title = ?1,
                    is_completed = ?2,
                    updated_at = (strftime('%s', 'now') * 1000)
                 WHERE uuid = ?3;",
                params![
                    task.title.as_str(),
                    bool_to_int(task.is_completed),
                    task.uuid.to_string(),
                ],
            )?;
            if changed == 0 {
                return Err(StoreError::NotFound(task.uuid));
            }
        }
        tx.commit()?;

        self.dirty.borrow_mut().clear();
        Ok(())
    }
}

fn verify_schema(conn: &Connection) -> StoreResult<()> {
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    let expected_version = latest_version();
    if actual_version != expected_version {
        return Err(StoreError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let table_exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'tasks'
        );",
        [],
        |row| row.get(0),
    )?;
    if table_exists == 0 {
        return Err(StoreError::MissingRequiredTable("tasks"));
    }

    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info('tasks');")?;
    let mut rows = stmt.query([])?;
    let mut columns = Vec::new();
    while let Some(row) = rows.next()? {
        columns.push(row.get::<_, String>(0)?);
    }

    for column in REQUIRED_COLUMNS {
        if !columns.iter().any(|name| name == column) {
            return Err(StoreError::MissingRequiredColumn {
                table: "tasks",
                column,
            });
        }
    }

    Ok(())
}

fn parse_task_row(row: &Row<'_>) -> StoreResult<Task> {
    let uuid_text: String = row.get("uuid")?;
    let uuid = Uuid::parse_str(&uuid_text).map_err(|_| {
        StoreError::InvalidData(format!("invalid uuid value `{uuid_text}` in tasks.uuid"))
    })?;

    let is_completed = match row.get::<_, i64>("is_completed")? {
        0 => false,
        1 => true,
        other => {
            return Err(StoreError::InvalidData(format!(
                "invalid is_completed value `{other}` in tasks.is_completed"
            )));
        }
    };

    Ok(Task {
        uuid,
        title: row.get("title")?,
        is_completed,
    })
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
