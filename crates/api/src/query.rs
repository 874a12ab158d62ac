//! Query parameter types for API handlers.

use serde::Deserialize;

/// Pagination parameters for the task list (`?skip=&limit=`).
///
/// Defaults and bounds are applied by [`taskapi_core::pagination::Page::resolve`].
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}
