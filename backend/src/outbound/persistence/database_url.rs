//! `DATABASE_URL` handling.
//!
//! The site keeps its café table in a single SQLite file. Deployments may
//! still carry a SQLAlchemy-style `sqlite:///path` URL, so that prefix is
//! accepted and stripped; any other scheme is rejected at startup.

use mockable::Env;

pub(crate) const DATABASE_URL_ENV: &str = "DATABASE_URL";
/// File used when `DATABASE_URL` is unset.
pub const DEFAULT_DATABASE_PATH: &str = "cafes.db";
const SQLITE_PREFIX: &str = "sqlite:///";

/// Errors raised while interpreting `DATABASE_URL`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatabaseUrlError {
    /// The URL names a database other than SQLite.
    #[error("unsupported DATABASE_URL '{value}'; expected a SQLite path or sqlite:///path")]
    UnsupportedScheme { value: String },
    /// The URL is set but names no file.
    #[error("DATABASE_URL is empty")]
    Empty,
}

/// Resolve the SQLite file path from the environment.
///
/// # Examples
/// ```
/// use cafe_directory::outbound::persistence::database_path_from_env;
/// use mockable::MockEnv;
///
/// let mut env = MockEnv::new();
/// env.expect_string()
///     .returning(|_| Some("sqlite:///cafes.db".to_owned()));
/// assert_eq!(database_path_from_env(&env).as_deref(), Ok("cafes.db"));
/// ```
pub fn database_path_from_env<E: Env>(env: &E) -> Result<String, DatabaseUrlError> {
    match env.string(DATABASE_URL_ENV) {
        Some(value) => database_path(&value),
        None => Ok(DEFAULT_DATABASE_PATH.to_owned()),
    }
}

fn database_path(value: &str) -> Result<String, DatabaseUrlError> {
    let trimmed = value.trim();
    let path = match trimmed.strip_prefix(SQLITE_PREFIX) {
        Some(path) => path,
        None if trimmed.contains("://") => {
            return Err(DatabaseUrlError::UnsupportedScheme {
                value: value.to_owned(),
            });
        }
        None => trimmed,
    };
    if path.is_empty() {
        return Err(DatabaseUrlError::Empty);
    }
    Ok(path.to_owned())
}
