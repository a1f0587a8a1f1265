//! Port for the persisted café table.
//!
//! The directory reads every row once at startup; the only mutation is the
//! optional administrative delete. Adapters keep SQL and connection handling
//! behind this boundary.

use async_trait::async_trait;

use crate::domain::{Cafe, CafeId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by café repository adapters.
    pub enum CafeRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "cafe repository connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } =>
            "cafe repository query failed: {message}",
    }
}

/// Port for reading (and optionally deleting) café records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CafeRepository: Send + Sync {
    /// Read every café in storage order (ascending id).
    async fn load_all(&self) -> Result<Vec<Cafe>, CafeRepositoryError>;

    /// Delete the café with `id`.
    ///
    /// Returns whether a row was removed. Deleting an id that does not exist
    /// is not an error.
    async fn delete(&self, id: CafeId) -> Result<bool, CafeRepositoryError>;
}

/// Fixture implementation serving a fixed list and discarding deletes.
#[derive(Debug, Default, Clone)]
pub struct FixtureCafeRepository {
    cafes: Vec<Cafe>,
}

impl FixtureCafeRepository {
    /// Serve `cafes` from [`CafeRepository::load_all`].
    pub fn with_cafes(cafes: Vec<Cafe>) -> Self {
        Self { cafes }
    }
}

#[async_trait]
impl CafeRepository for FixtureCafeRepository {
    async fn load_all(&self) -> Result<Vec<Cafe>, CafeRepositoryError> {
        Ok(self.cafes.clone())
    }

    async fn delete(&self, id: CafeId) -> Result<bool, CafeRepositoryError> {
        Ok(self.cafes.iter().any(|cafe| cafe.id == id))
    }
}
