//! Response envelope types for API handlers.

use serde::Serialize;
use taskapi_db::models::task::Task;

/// Body of `GET /tasks`: one page of tasks plus the page length.
#[derive(Debug, Serialize)]
pub struct TaskList {
    pub tasks: Vec<Task>,
    /// Number of tasks in this page (not the table total).
    pub count: usize,
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        let count = tasks.len();
        Self { tasks, count }
    }
}
