//! Handlers for the `/tasks` resource.

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use taskapi_core::error::CoreError;
use taskapi_core::pagination::Page;
use taskapi_core::types::DbId;
use taskapi_db::models::task::{CreateTask, Task, UpdateTask};
use taskapi_db::repositories::TaskRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::validated_json::ValidatedJson;
use crate::query::PaginationParams;
use crate::response::TaskList;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Task", id })
}

/// POST /tasks
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateTask>,
) -> AppResult<(StatusCode, Json<Task>)> {
    let task = TaskRepo::create(&state.pool, &input).await?;
    tracing::info!(task_id = task.id, "Task created");
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /tasks?skip=&limit=
pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> AppResult<Json<TaskList>> {
    let Query(params) = params?;
    let page = Page::resolve(params.skip, params.limit, state.config.max_list_limit)?;
    let tasks = TaskRepo::list(&state.pool, page.skip, page.limit).await?;
    Ok(Json(TaskList::from(tasks)))
}

/// GET /tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<Task>> {
    let Path(id) = id?;
    let task = TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(task))
}

/// PUT /tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
    ValidatedJson(input): ValidatedJson<UpdateTask>,
) -> AppResult<Json<Task>> {
    let Path(id) = id?;
    if input.is_empty() {
        tracing::debug!(task_id = id, "Empty update, refreshing timestamp only");
    }
    let task = TaskRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(task_id = id, "Task updated");
    Ok(Json(task))
}

/// DELETE /tasks/{id}
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = id?;
    if TaskRepo::delete(&state.pool, id).await? {
        tracing::info!(task_id = id, "Task deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
