//! Repository for the `tasks` table.
//!
//! Every method is a single SQL statement, so each runs in its own implicit
//! transaction. "No such row" comes back as `None` / `false`, never as an
//! error.

use sqlx::PgPool;
use taskapi_core::types::DbId;

use crate::models::task::{CreateTask, Task, UpdateTask};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, description, status, priority, due_date, created_at, updated_at";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row.
    ///
    /// The store assigns `id`; `created_at` and `updated_at` both come from
    /// the same `NOW()` and are therefore equal.
    pub async fn create(pool: &PgPool, input: &CreateTask) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (title, description, status, priority, due_date)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.status)
            .bind(input.priority)
            .bind(input.due_date)
            .fetch_one(pool)
            .await
    }

    /// Find a task by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List tasks in insertion order, skipping `skip` rows and returning at
    /// most `limit`. Negative arguments are treated as zero.
    pub async fn list(pool: &PgPool, skip: i64, limit: i64) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks ORDER BY id OFFSET $1 LIMIT $2");
        sqlx::query_as::<_, Task>(&query)
            .bind(skip.max(0))
            .bind(limit.max(0))
            .fetch_all(pool)
            .await
    }

    /// Count all stored tasks.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tasks")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Update a task. Only fields the caller supplied are written; a
    /// supplied `null` clears the column. `updated_at` is always refreshed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let (title_set, title) = input.title.as_binding();
        let (description_set, description) = input.description.as_binding();
        let (status_set, status) = input.status.as_binding();
        let (priority_set, priority) = input.priority.as_binding();
        let (due_date_set, due_date) = input.due_date.as_binding();

        let query = format!(
            "UPDATE tasks SET
                title       = CASE WHEN $2  THEN $3  ELSE title END,
                description = CASE WHEN $4  THEN $5  ELSE description END,
                status      = CASE WHEN $6  THEN $7  ELSE status END,
                priority    = CASE WHEN $8  THEN $9  ELSE priority END,
                due_date    = CASE WHEN $10 THEN $11 ELSE due_date END,
                updated_at  = GREATEST(NOW(), updated_at + INTERVAL '1 microsecond')
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(title_set)
            .bind(title)
            .bind(description_set)
            .bind(description)
            .bind(status_set)
            .bind(status.copied())
            .bind(priority_set)
            .bind(priority.copied())
            .bind(due_date_set)
            .bind(due_date.copied())
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a task by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
