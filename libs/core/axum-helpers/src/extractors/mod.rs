//! Extractors that reject with [`AppError`](crate::errors::AppError) JSON
//! instead of axum's plain-text rejections.

pub mod typed_path;
pub mod uuid_path;
pub mod validated_json;

pub use typed_path::TypedPath;
pub use uuid_path::UuidPath;
pub use validated_json::ValidatedJson;
