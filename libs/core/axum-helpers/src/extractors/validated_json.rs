//! JSON body extractor that runs `validator` rules before the handler.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Rejects with 400 and per-field details when `T::validate` fails.
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct CreateItem {
///     #[validate(custom(function = "not_blank"))]
///     title: String,
/// }
///
/// async fn add(ValidatedJson(input): ValidatedJson<CreateItem>) -> String {
///     input.title
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        data.validate()?;
        Ok(ValidatedJson(data))
    }
}
