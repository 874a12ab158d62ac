//! Domain model structs and DTOs.
//!
//! - [`enums`]: closed value sets stored as `TEXT`
//! - [`task`]: the `FromRow` + `Serialize` entity plus its create and update DTOs

pub mod enums;
pub mod task;
