//! Task entity model and DTOs.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskapi_core::patch::Patch;
use taskapi_core::task::{
    validate_description, validate_title, MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH,
    MIN_TITLE_LENGTH,
};
use taskapi_core::types::{DbId, Timestamp};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::enums::{TaskPriority, TaskStatus};

/// A task row from the `tasks` table. Also the read view returned by the API.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new task.
///
/// `status` and `priority` fall back to `pending` / `medium` when omitted.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTask {
    #[validate(length(
        min = MIN_TITLE_LENGTH,
        max = MAX_TITLE_LENGTH,
        message = "Task title must be between 1 and 200 characters"
    ))]
    pub title: String,
    #[validate(length(
        max = MAX_DESCRIPTION_LENGTH,
        message = "Task description exceeds maximum length of 1000 characters"
    ))]
    pub description: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    pub due_date: Option<Timestamp>,
}

impl CreateTask {
    /// A create DTO with only a title; everything else takes its default.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            status: TaskStatus::default(),
            priority: TaskPriority::default(),
            due_date: None,
        }
    }
}

/// DTO for partially updating a task.
///
/// Every field is a [`Patch`]: a missing key leaves the column untouched,
/// `null` clears a nullable column, and a value overwrites it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateTask {
    pub title: Patch<String>,
    pub description: Patch<String>,
    pub status: Patch<TaskStatus>,
    pub priority: Patch<TaskPriority>,
    pub due_date: Patch<Timestamp>,
}

impl UpdateTask {
    /// `true` when the caller supplied no field at all.
    pub fn is_empty(&self) -> bool {
        !(self.title.is_provided()
            || self.description.is_provided()
            || self.status.is_provided()
            || self.priority.is_provided()
            || self.due_date.is_provided())
    }
}

impl Validate for UpdateTask {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        match &self.title {
            Patch::Null => errors.add("title", not_nullable()),
            Patch::Value(title) => {
                if let Err(msg) = validate_title(title) {
                    errors.add(
                        "title",
                        length_error(msg, Some(MIN_TITLE_LENGTH), MAX_TITLE_LENGTH),
                    );
                }
            }
            Patch::Unset => {}
        }

        if let Patch::Value(description) = &self.description {
            if let Err(msg) = validate_description(description) {
                errors.add("description", length_error(msg, None, MAX_DESCRIPTION_LENGTH));
            }
        }

        if self.status.is_null() {
            errors.add("status", not_nullable());
        }
        if self.priority.is_null() {
            errors.add("priority", not_nullable());
        }

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn length_error(message: String, min: Option<u64>, max: u64) -> ValidationError {
    let mut err = ValidationError::new("length");
    if let Some(min) = min {
        err.add_param(Cow::from("min"), &min);
    }
    err.add_param(Cow::from("max"), &max);
    err.message = Some(Cow::from(message));
    err
}

fn not_nullable() -> ValidationError {
    let mut err = ValidationError::new("not_nullable");
    err.message = Some(Cow::from("Field cannot be null"));
    err
}
