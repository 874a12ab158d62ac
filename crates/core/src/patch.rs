//! Field-presence wrapper for partial updates.
//!
//! JSON cannot express "leave this column alone" with `null`, because `null`
//! is itself a legal value for nullable columns. [`Patch`] keeps the three
//! states apart:
//!
//! | JSON                  | `Patch<T>`        |
//! |-----------------------|-------------------|
//! | key missing           | `Patch::Unset`    |
//! | `"key": null`         | `Patch::Null`     |
//! | `"key": <value>`      | `Patch::Value(v)` |
//!
//! Fields of this type must be annotated with `#[serde(default)]`; serde only
//! calls [`Deserialize`] for keys that are present in the input.

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    /// The caller did not mention the field.
    Unset,
    /// The caller explicitly sent `null`.
    Null,
    /// The caller sent a value.
    Value(T),
}

impl<T> Patch<T> {
    /// `true` when the caller supplied the field, either as a value or as `null`.
    pub fn is_provided(&self) -> bool {
        !matches!(self, Patch::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Patch::Null)
    }

    /// The supplied value, if any. `Unset` and `Null` both yield `None`.
    pub fn value(&self) -> Option<&T> {
        match self {
            Patch::Value(v) => Some(v),
            Patch::Unset | Patch::Null => None,
        }
    }

    /// Split into a `(provided, value)` pair, the shape bound into
    /// `CASE WHEN $provided THEN $value ELSE column END` updates.
    pub fn as_binding(&self) -> (bool, Option<&T>) {
        (self.is_provided(), self.value())
    }
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Unset
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}
