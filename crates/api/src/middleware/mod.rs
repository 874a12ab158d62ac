//! Request extractors shared by handlers.
//!
//! - [`validated_json::ValidatedJson`] -- Deserializes a JSON body and runs its `validator` rules.

pub mod validated_json;
