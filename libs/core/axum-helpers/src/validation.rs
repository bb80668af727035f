//! Custom `validator` rules shared by the domain DTOs.

use std::borrow::Cow;

use validator::ValidationError;

/// Rejects empty and whitespace-only strings.
///
/// ```ignore
/// #[derive(Validate)]
/// struct CreateItem {
///     #[validate(custom(function = "axum_helpers::validation::not_blank"))]
///     title: String,
/// }
/// ```
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.message = Some(Cow::Borrowed("must not be blank"));
        return Err(error);
    }
    Ok(())
}
