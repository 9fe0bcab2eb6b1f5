//! Shared catalog holder with snapshot reload.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use super::error::CatalogError;
use super::loader::CatalogLoader;
use super::routes::RouteCatalog;

/// Thread-safe home for the current route catalog.
///
/// Readers take an `Arc<RouteCatalog>` snapshot and plan against it without
/// holding the lock. Reloading builds a complete new catalog first and only
/// then swaps the pointer, so a reader never sees a half-loaded catalog and
/// in-flight requests keep the snapshot they started with.
#[derive(Clone)]
pub struct CatalogStore {
    inner: Arc<RwLock<Arc<RouteCatalog>>>,
    loader: Option<CatalogLoader>,
}

impl CatalogStore {
    /// Create a store by loading from the given source.
    ///
    /// This will fail if the source is unreadable or invalid.
    pub async fn load(loader: CatalogLoader) -> Result<Self, CatalogError> {
        let catalog = loader.load().await?;
        info!(
            routes = catalog.len(),
            source = %loader.source(),
            "Loaded route catalog"
        );

        Ok(Self {
            inner: Arc::new(RwLock::new(Arc::new(catalog))),
            loader: Some(loader),
        })
    }

    /// Create a store around a fixed catalog with no source to reload from.
    pub fn fixed(catalog: RouteCatalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(catalog))),
            loader: None,
        }
    }

    /// The current catalog snapshot.
    pub async fn snapshot(&self) -> Arc<RouteCatalog> {
        let guard = self.inner.read().await;
        Arc::clone(&*guard)
    }

    /// Swap in a new catalog, returning the one it replaced.
    pub async fn replace(&self, catalog: RouteCatalog) -> Arc<RouteCatalog> {
        let next = Arc::new(catalog);
        let mut guard = self.inner.write().await;
        std::mem::replace(&mut *guard, next)
    }

    /// Reload the catalog from its source.
    ///
    /// On success, replaces the current catalog and returns it. On failure,
    /// the existing catalog is preserved and the error is returned.
    pub async fn reload(&self) -> Result<Arc<RouteCatalog>, CatalogError> {
        let loader = self.loader.as_ref().ok_or(CatalogError::NoSource)?;

        let catalog = match loader.load().await {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!(
                    source = %loader.source(),
                    error = %e,
                    "Catalog reload failed, keeping previous"
                );
                return Err(e);
            }
        };

        let next = Arc::new(catalog);
        *self.inner.write().await = Arc::clone(&next);
        info!(routes = next.len(), source = %loader.source(), "Reloaded route catalog");

        Ok(next)
    }
}
