//! Offset/limit pagination helpers.

use crate::error::CoreError;

/// Number of rows skipped when the caller does not say otherwise.
pub const DEFAULT_SKIP: i64 = 0;

/// Page size used when the caller does not say otherwise.
pub const DEFAULT_LIMIT: i64 = 100;

/// A resolved, non-negative `OFFSET` / `LIMIT` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: i64,
    pub limit: i64,
}

impl Page {
    /// Resolve user-supplied `skip` / `limit` values.
    ///
    /// Missing values fall back to [`DEFAULT_SKIP`] and [`DEFAULT_LIMIT`].
    /// Negative values are rejected. `limit` is capped at `max_limit`.
    pub fn resolve(
        skip: Option<i64>,
        limit: Option<i64>,
        max_limit: i64,
    ) -> Result<Self, CoreError> {
        let skip = skip.unwrap_or(DEFAULT_SKIP);
        if skip < 0 {
            return Err(CoreError::Validation(format!(
                "skip must be non-negative, got {skip}"
            )));
        }

        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        if limit < 0 {
            return Err(CoreError::Validation(format!(
                "limit must be non-negative, got {limit}"
            )));
        }

        Ok(Self {
            skip,
            limit: limit.min(max_limit.max(0)),
        })
    }
}
