use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use taskapi_core::error::CoreError;
use validator::ValidationErrors;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `taskapi_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Field-level schema violations from `validator`.
    #[error("Validation failed: {0}")]
    Invalid(#[from] ValidationErrors),

    /// The request body could not be read as the expected JSON shape.
    #[error("Invalid JSON body: {0}")]
    Json(#[from] JsonRejection),

    /// The query string could not be parsed (e.g. `?skip=abc`).
    #[error("Invalid query string: {0}")]
    Query(#[from] QueryRejection),

    /// A path parameter could not be parsed (e.g. `/tasks/abc`).
    #[error("Invalid path parameter: {0}")]
    Path(#[from] PathRejection),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                    None,
                ),
                CoreError::Validation(msg) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "VALIDATION_ERROR",
                    msg.clone(),
                    None,
                ),
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Schema validation ---
            AppError::Invalid(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "VALIDATION_ERROR",
                "Request body failed validation".to_string(),
                Some(json!(errors)),
            ),
            AppError::Json(rejection) => classify_json_rejection(rejection),
            AppError::Query(rejection) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "VALIDATION_ERROR",
                "Query string failed validation".to_string(),
                Some(json!({ "query": [rejection.body_text()] })),
            ),
            AppError::Path(rejection) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "VALIDATION_ERROR",
                "Path parameter failed validation".to_string(),
                Some(json!({ "path": [rejection.body_text()] })),
            ),
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let Some(details) = details {
            body["details"] = details;
        }

        (status, axum::Json(body)).into_response()
    }
}

type Classified = (StatusCode, &'static str, String, Option<serde_json::Value>);

fn internal() -> Classified {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
        None,
    )
}

/// Classify a body rejection.
///
/// Shape errors (missing field, unknown enum value, wrong type) are
/// validation failures and map to 422; the deserializer's message is passed
/// through as the detail. Syntax errors and a missing content type keep
/// axum's own status.
fn classify_json_rejection(rejection: &JsonRejection) -> Classified {
    match rejection {
        JsonRejection::JsonDataError(err) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "VALIDATION_ERROR",
            "Request body failed validation".to_string(),
            Some(json!({ "body": [err.body_text()] })),
        ),
        other => (other.status(), "BAD_REQUEST", other.body_text(), None),
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Check constraint violations (PostgreSQL `23514`) map to 422.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> Classified {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
            None,
        ),
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23514") => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                "VALIDATION_ERROR",
                format!("Value violates check constraint: {constraint}"),
                None,
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}
