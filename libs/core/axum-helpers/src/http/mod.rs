//! HTTP middleware (CORS, security headers) and the plain message body.
//!
//! ```ignore
//! use axum_helpers::http::{cors_layer_from_origins, security_headers};
//!
//! let app = Router::new()
//!     .layer(axum::middleware::from_fn(security_headers))
//!     .layer(cors_layer_from_origins(&config.cors_allowed_origins)?);
//! ```

pub mod cors;
pub mod message;
pub mod security;

pub use cors::{cors_layer_from_origins, create_cors_layer, create_permissive_cors_layer};
pub use message::MessageResponse;
pub use security::security_headers;
