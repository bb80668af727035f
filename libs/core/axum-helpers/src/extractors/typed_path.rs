use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

/// [`Path`] whose rejection is an [`AppError::PathRejection`].
///
/// Used for non-UUID segments such as `/items/filter/by/price/{price}`.
#[derive(Debug, Clone)]
pub struct TypedPath<T>(pub T);

impl<T, S> FromRequestParts<S> for TypedPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(TypedPath(value))
    }
}
