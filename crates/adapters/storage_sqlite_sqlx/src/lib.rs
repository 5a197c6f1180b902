//! # chorehub-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `chorehub-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `chorehub-app` (for port traits) and `chorehub-domain` (for
//! domain types). The `app` and `domain` crates must never reference this
//! adapter.

pub mod chore_repo;
pub mod error;
pub mod history_repo;
pub mod pool;
pub mod user_repo;

pub use chore_repo::SqliteChoreRepository;
// Re-exported so the composition root can name the pool type without
// depending on sqlx directly.
pub use sqlx::SqlitePool;
pub use error::StorageError;
pub use history_repo::SqliteChoreHistoryStore;
pub use pool::{Config, Database};
pub use user_repo::SqliteUserRepository;
