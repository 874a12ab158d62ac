//! Shared domain primitives for the task API.
//!
//! Nothing in this crate touches the database or HTTP; it holds the types,
//! error taxonomy and pure helpers that both `taskapi-db` and `taskapi-api`
//! build on.

pub mod error;
pub mod pagination;
pub mod patch;
pub mod task;
pub mod types;
