//! Todo Items Domain
//!
//! Layered the same way as the other domains in this workspace:
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business rules: validation, uniqueness, conflicts
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory / Postgres impls)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← TodoItem entity and wire model
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_todos::{handlers, InMemoryTodoRepository, TodoItemService};
//!
//! let repository = InMemoryTodoRepository::new();
//! let service = TodoItemService::new(repository);
//!
//! // Axum router, to be nested under /api/todoitems
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{TodoError, TodoResult};
pub use models::TodoItem;
pub use postgres::PgTodoRepository;
pub use repository::{InMemoryTodoRepository, TodoRepository};
pub use service::TodoItemService;
