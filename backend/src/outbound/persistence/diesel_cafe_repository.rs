//! SQLite-backed `CafeRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CafeRepository, CafeRepositoryError};
use crate::domain::{Cafe, CafeId};

use super::diesel_basic_error_mapping::{map_diesel_error, map_pool_error};
use super::models::CafeRow;
use super::pool::DbPool;
use super::schema::cafes;

/// Diesel-backed implementation of the `CafeRepository` port.
#[derive(Clone)]
pub struct DieselCafeRepository {
    pool: DbPool,
}

impl DieselCafeRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CafeRepository for DieselCafeRepository {
    async fn load_all(&self) -> Result<Vec<Cafe>, CafeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<CafeRow> = cafes::table
            .select(CafeRow::as_select())
            .order(cafes::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Cafe::from).collect())
    }

    async fn delete(&self, id: CafeId) -> Result<bool, CafeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(cafes::table.filter(cafes::id.eq(id)))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(removed > 0)
    }
}
