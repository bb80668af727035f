use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use uuid::Uuid;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User with id: {0} not found")]
    NotFound(Uuid),

    #[error("User with {field}: {value} not found")]
    NotFoundBy { field: &'static str, value: String },

    #[error("No users found with {field}: {value}")]
    NoMatch { field: &'static str, value: String },

    #[error("User with login '{0}' already exists")]
    DuplicateLogin(String),

    #[error("User with email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Database error: {0}")]
    Database(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl From<DbErr> for UserError {
    fn from(err: DbErr) -> Self {
        UserError::Database(err.to_string())
    }
}

impl UserError {
    /// Map a failed insert/update, turning unique index violations into
    /// the matching duplicate error.
    pub(crate) fn from_write(err: DbErr, login: &str, email: &str) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                Self::duplicate(&detail, login, email)
            }
            _ => err.into(),
        }
    }

    /// The violation message names the index: `users_login_key` or
    /// `users_email_key`.
    fn duplicate(detail: &str, login: &str, email: &str) -> Self {
        if detail.contains("login") {
            UserError::DuplicateLogin(login.to_string())
        } else {
            UserError::DuplicateEmail(email.to_string())
        }
    }
}

/// Convert UserError to AppError for standardized error responses
impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) | UserError::NotFoundBy { .. } | UserError::NoMatch { .. } => {
                AppError::NotFound(err.to_string())
            }
            UserError::DuplicateLogin(_) | UserError::DuplicateEmail(_) => {
                AppError::Conflict(err.to_string())
            }
            UserError::Validation(errors) => AppError::ValidationError(errors),
            UserError::Database(msg) => {
                tracing::error!(error = %msg, "User store failure");
                AppError::BadRequest("Request could not be processed".to_string())
            }
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
