use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, warn};

use shelfrank_core::config::TextConfig;
use shelfrank_core::error::{Error, Result};
use shelfrank_core::traits::CatalogStore;
use shelfrank_text::Normalizer;

use crate::index::SearchIndex;

/// Holds at most one [`SearchIndex`].
///
/// The slot lock is held for the whole fetch-and-build, so callers racing on
/// a cold cache wait for the single in-flight build instead of starting their
/// own. Readers get an `Arc` and never touch the lock again.
pub struct IndexCache {
    slot: Mutex<Option<Arc<SearchIndex>>>,
    normalizer: Normalizer,
    text: TextConfig,
}

impl Default for IndexCache {
    fn default() -> Self {
        Self::new(Normalizer::new(), TextConfig::default())
    }
}

impl IndexCache {
    pub fn new(normalizer: Normalizer, text: TextConfig) -> Self {
        Self { slot: Mutex::new(None), normalizer, text }
    }

    /// Cached index, building it from `store` first if the cache is cold.
    ///
    /// A failed fetch leaves the cache cold, so the next call tries again.
    pub fn get_or_build(&self, store: &dyn CatalogStore) -> Result<Arc<SearchIndex>> {
        let mut slot = self.slot.lock();
        if let Some(index) = slot.as_ref() {
            debug!("search index cache hit");
            return Ok(Arc::clone(index));
        }
        let index = Arc::new(self.build(store)?);
        *slot = Some(Arc::clone(&index));
        Ok(index)
    }

    /// Build from a fresh snapshot and swap it in. On failure the previous
    /// index, if any, stays in place.
    pub fn rebuild(&self, store: &dyn CatalogStore) -> Result<Arc<SearchIndex>> {
        let mut slot = self.slot.lock();
        let index = Arc::new(self.build(store)?);
        *slot = Some(Arc::clone(&index));
        Ok(index)
    }

    /// Drop the cached index; the next [`IndexCache::get_or_build`] rebuilds.
    pub fn invalidate(&self) {
        if self.slot.lock().take().is_some() {
            debug!("search index invalidated");
        }
    }

    pub fn current(&self) -> Option<Arc<SearchIndex>> {
        self.slot.lock().clone()
    }

    pub fn is_warm(&self) -> bool {
        self.slot.lock().is_some()
    }

    fn build(&self, store: &dyn CatalogStore) -> Result<SearchIndex> {
        let records = store.fetch_all_records().map_err(|e| {
            warn!(error = %format!("{e:#}"), "catalog fetch failed");
            Error::IndexUnavailable(format!("{e:#}"))
        })?;
        Ok(SearchIndex::build(records, self.normalizer.clone(), &self.text))
    }
}
