pub mod health;
pub mod task;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /tasks                 list, create
/// /tasks/                list, create (trailing-slash alias)
/// /tasks/{id}            get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    task::router()
}
