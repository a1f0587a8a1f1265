//! SQLite persistence adapters using Diesel ORM.
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types.
//! - **Internal models**: row structs (`models.rs`) and the schema
//!   (`schema.rs`) never leave this module.
//! - **Pooling**: `bb8` over `diesel-async`'s `SyncConnectionWrapper`.
//! - **Typed errors**: Diesel and pool failures map onto
//!   `CafeRepositoryError`.
//!
//! # Example
//!
//! ```no_run
//! use cafe_directory::outbound::persistence::{
//!     DbPool, DieselCafeRepository, PoolConfig, run_pending_migrations,
//! };
//!
//! # async fn open() -> Result<(), Box<dyn std::error::Error>> {
//! run_pending_migrations("cafes.db").await?;
//! let pool = DbPool::new(PoolConfig::new("cafes.db")).await?;
//! let repo = DieselCafeRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod database_url;
mod diesel_basic_error_mapping;
mod diesel_cafe_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use database_url::{DEFAULT_DATABASE_PATH, DatabaseUrlError, database_path_from_env};
pub use diesel_cafe_repository::DieselCafeRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError, SqliteAsyncConnection};
