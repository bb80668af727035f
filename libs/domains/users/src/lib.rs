//! Users Domain
//!
//! Shop users with unique logins and emails.
//!
//! - [`models`]: `User` (stored) and `UserResponse` (returned, no password)
//! - [`repository`]: `UserRepository` trait and an in-memory store
//! - [`postgres`]: SeaORM store backed by the `users` table
//! - [`service`]: validation, duplicate detection, not-found mapping
//! - [`handlers`]: axum router and OpenAPI docs
//!
//! ```rust,no_run
//! use domain_users::{handlers, PgUserRepository, UserService};
//! use sea_orm::DatabaseConnection;
//!
//! fn users_router(db: DatabaseConnection) -> axum::Router {
//!     handlers::router(UserService::new(PgUserRepository::new(db)))
//! }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{UserError, UserResult};
pub use handlers::ApiDoc;
pub use models::{CreateUser, UpdateUser, User, UserFilter, UserResponse};
pub use postgres::PgUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
