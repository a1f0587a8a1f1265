//! Embedded schema migrations.
//!
//! Migrations under `backend/migrations` are compiled into the binary and
//! applied at startup, before the pool hands out connections.

use diesel::{Connection, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while applying migrations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MigrationError {
    /// The database file could not be opened.
    #[error("failed to open database {path}: {message}")]
    Connect { path: String, message: String },
    /// A migration failed to apply.
    #[error("failed to apply migrations: {message}")]
    Apply { message: String },
    /// The blocking migration task did not complete.
    #[error("migration task failed: {message}")]
    Task { message: String },
}

/// Apply every pending migration to the SQLite file at `database_path`.
///
/// Runs on the blocking thread pool because Diesel migrations are
/// synchronous.
///
/// # Errors
/// Returns [`MigrationError`] when the file cannot be opened or a migration
/// fails.
pub async fn run_pending_migrations(database_path: &str) -> Result<(), MigrationError> {
    let path = database_path.to_owned();
    tokio::task::spawn_blocking(move || apply(&path))
        .await
        .map_err(|err| MigrationError::Task {
            message: err.to_string(),
        })?
}

fn apply(path: &str) -> Result<(), MigrationError> {
    let mut conn = SqliteConnection::establish(path).map_err(|err| MigrationError::Connect {
        path: path.to_owned(),
        message: err.to_string(),
    })?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError::Apply {
            message: err.to_string(),
        })?;
    info!(count = applied.len(), path, "database migrations applied");
    Ok(())
}
