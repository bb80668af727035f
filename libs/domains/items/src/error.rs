use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Item with id: {0} not found")]
    NotFound(Uuid),

    #[error("No items found with {field}: {value}")]
    NoMatch { field: &'static str, value: String },

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Database error: {0}")]
    Database(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

impl From<sea_orm::DbErr> for ItemError {
    fn from(err: sea_orm::DbErr) -> Self {
        ItemError::Database(err.to_string())
    }
}

/// Convert ItemError to AppError for standardized error responses
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::NotFound(_) | ItemError::NoMatch { .. } => {
                AppError::NotFound(err.to_string())
            }
            ItemError::Validation(errors) => AppError::ValidationError(errors),
            ItemError::Database(msg) => {
                tracing::error!(error = %msg, "Item store failure");
                AppError::BadRequest("Request could not be processed".to_string())
            }
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_not_found_maps_to_404() {
        let id = Uuid::now_v7();
        let app_error: AppError = ItemError::NotFound(id).into();

        assert_eq!(app_error.status(), StatusCode::NOT_FOUND);
        assert!(app_error.to_string().contains(&id.to_string()));
    }

    #[test]
    fn test_no_match_maps_to_404() {
        let err = ItemError::NoMatch {
            field: "title",
            value: "Lamp".to_string(),
        };
        assert_eq!(err.to_string(), "No items found with title: Lamp");

        let app_error: AppError = err.into();
        assert_eq!(app_error.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_database_error_is_hidden_behind_bad_request() {
        let app_error: AppError = ItemError::Database("connection reset".to_string()).into();

        assert_eq!(app_error.status(), StatusCode::BAD_REQUEST);
        assert!(!app_error.to_string().contains("connection reset"));
    }
}
