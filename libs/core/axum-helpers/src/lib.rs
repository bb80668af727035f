//! # Axum Helpers
//!
//! Shared building blocks for the shop's Axum services.
//!
//! - **[`errors`]**: `AppError` and the structured `ErrorResponse` body
//! - **[`extractors`]**: `UuidPath`, `TypedPath`, `ValidatedJson`
//! - **[`validation`]**: custom `validator` rules
//! - **[`http`]**: CORS, security headers, `MessageResponse`
//! - **[`server`]**: documented router, health checks, graceful shutdown
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router};
//!
//! let router = create_router::<ApiDoc>(api_routes, &config.server)?;
//! create_production_app(router, &config.server, Duration::from_secs(30), async {}).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;
pub mod validation;

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks, shutdown_signal,
};

pub use http::{
    MessageResponse, cors_layer_from_origins, create_cors_layer, create_permissive_cors_layer,
    security_headers,
};

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::{TypedPath, UuidPath, ValidatedJson};
