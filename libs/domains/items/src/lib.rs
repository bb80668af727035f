//! Items Domain
//!
//! Shop items: model, storage, business rules and HTTP endpoints.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, not-found mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + Postgres / in-memory)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_items::{handlers, ItemService, PgItemRepository};
//! use sea_orm::DatabaseConnection;
//!
//! fn items_router(db: DatabaseConnection) -> axum::Router {
//!     let service = ItemService::new(PgItemRepository::new(db));
//!     handlers::router(service)
//! }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{ItemError, ItemResult};
pub use handlers::ApiDoc;
pub use models::{CreateItem, Item, ItemFilter, UpdateItem};
pub use postgres::PgItemRepository;
pub use repository::{InMemoryItemRepository, ItemRepository};
pub use service::ItemService;
