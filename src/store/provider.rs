use super::{RecordStore, SharedStore};
use crate::errors::{Error, Result};
use tokio::sync::{RwLockReadGuard, RwLockWriteGuard};
use tracing::error;

/// Hands the shared store to consumers.
///
/// A provider built with [`StoreProvider::unprovided`] refuses every access with
/// [`Error::StoreNotProvided`], so a missing setup step fails on first use instead of
/// producing empty aggregates.
#[derive(Debug, Clone, Default)]
pub struct StoreProvider {
    store: Option<SharedStore>,
}

impl StoreProvider {
    /// Provider backed by `store`.
    #[must_use]
    pub const fn new(store: SharedStore) -> Self {
        Self { store: Some(store) }
    }

    /// Provider with no store behind it.
    #[must_use]
    pub const fn unprovided() -> Self {
        Self { store: None }
    }

    /// The shared store handle.
    ///
    /// # Errors
    /// Returns [`Error::StoreNotProvided`] if no store was provided.
    pub fn store(&self) -> Result<&SharedStore> {
        self.store.as_ref().ok_or_else(|| {
            error!("Record store accessed outside of a provider");
            Error::StoreNotProvided
        })
    }

    /// Read access to the store.
    ///
    /// # Errors
    /// Returns [`Error::StoreNotProvided`] if no store was provided.
    pub async fn read(&self) -> Result<RwLockReadGuard<'_, RecordStore>> {
        Ok(self.store()?.read().await)
    }

    /// Write access to the store.
    ///
    /// # Errors
    /// Returns [`Error::StoreNotProvided`] if no store was provided.
    pub async fn write(&self) -> Result<RwLockWriteGuard<'_, RecordStore>> {
        Ok(self.store()?.write().await)
    }
}
