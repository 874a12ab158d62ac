//! JSON body extractor that also runs schema validation.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// A JSON request body that has been deserialized *and* validated.
///
/// Use in place of [`Json`] for any body with a [`Validate`] impl:
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<CreateTask>) -> AppResult<Json<Task>> {
///     // `input` already satisfies every length and enum rule.
/// }
/// ```
///
/// Deserialization failures and rule violations both surface as
/// [`AppError`], so handlers never see an invalid body.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}
