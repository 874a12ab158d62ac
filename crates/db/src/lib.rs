//! Persistence layer for the task API: pool, schema bootstrap, models and
//! repositories.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Default upper bound on pooled connections.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 20;

/// Table definition for `tasks`. Safe to run on every start.
const TASKS_SCHEMA: &str = "\
    CREATE TABLE IF NOT EXISTS tasks (
        id          BIGSERIAL PRIMARY KEY,
        title       VARCHAR(200) NOT NULL CHECK (char_length(title) >= 1),
        description VARCHAR(1000),
        status      TEXT NOT NULL DEFAULT 'pending'
                    CHECK (status IN ('pending', 'in_progress', 'completed')),
        priority    TEXT NOT NULL DEFAULT 'medium'
                    CHECK (priority IN ('low', 'medium', 'high')),
        due_date    TIMESTAMPTZ,
        created_at  TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at  TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        CONSTRAINT ck_tasks_updated_after_created CHECK (updated_at >= created_at)
    )";

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Create the `tasks` table if it does not exist yet.
///
/// There is no migration history; an existing table is left untouched.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(TASKS_SCHEMA).execute(pool).await?;
    tracing::debug!("tasks table ensured");
    Ok(())
}
