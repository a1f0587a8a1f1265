//! In-memory café directory.
//!
//! The directory is loaded once at startup and shared read-only across every
//! request worker. Readers take a cheap `Arc` clone of the current snapshot;
//! the optional delete path publishes a replacement snapshot instead of
//! mutating the one readers hold.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::info;

use crate::domain::ports::{CafeRepository, CafeRepositoryError};
use crate::domain::{Cafe, CafeId};

/// Startup snapshot of every café, backed by the repository it came from.
pub struct CafeDirectory {
    repository: Arc<dyn CafeRepository>,
    snapshot: RwLock<Arc<[Cafe]>>,
}

impl CafeDirectory {
    /// Read every café from `repository` into memory.
    ///
    /// # Errors
    /// Propagates repository failures; callers treat them as fatal at
    /// startup.
    pub async fn load(repository: Arc<dyn CafeRepository>) -> Result<Self, CafeRepositoryError> {
        let cafes = repository.load_all().await?;
        info!(count = cafes.len(), "loaded café directory");
        Ok(Self {
            repository,
            snapshot: RwLock::new(cafes.into()),
        })
    }

    /// Every café in storage order.
    pub fn all(&self) -> Arc<[Cafe]> {
        let guard = self.snapshot.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// First café whose id equals `id`, if any.
    ///
    /// A linear scan; the directory is small and ids are unique.
    pub fn find_by_id(&self, id: CafeId) -> Option<Cafe> {
        self.all().iter().find(|cafe| cafe.id == id).cloned()
    }

    /// Delete `id` from storage and drop it from the snapshot.
    ///
    /// Idempotent: removing an unknown id succeeds and returns `false`.
    ///
    /// # Errors
    /// Returns repository failures; the snapshot is left untouched then.
    pub async fn remove(&self, id: CafeId) -> Result<bool, CafeRepositoryError> {
        let deleted = self.repository.delete(id).await?;
        let mut guard = self
            .snapshot
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if guard.iter().any(|cafe| cafe.id == id) {
            let remaining: Arc<[Cafe]> = guard.iter().filter(|cafe| cafe.id != id).cloned().collect();
            *guard = remaining;
        }
        Ok(deleted)
    }
}
