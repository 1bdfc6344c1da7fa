use std::sync::Arc;
use tracing::debug;

use shelfrank_core::config::{EngineConfig, Settings, TextConfig};
use shelfrank_core::error::Result;
use shelfrank_core::traits::{CatalogStore, Searcher};
use shelfrank_core::types::SearchResult;
use shelfrank_text::Normalizer;
use shelfrank_vector::{IndexCache, IndexStats, SearchIndex};

use crate::fusion::rank;

/// Search façade over one catalog store and the index cache built from it.
///
/// The index is built lazily on the first search and then reused until
/// [`HybridSearchEngine::invalidate`] or [`HybridSearchEngine::refresh`] is
/// called; catalog writes are not observed on their own.
pub struct HybridSearchEngine<C> where C: CatalogStore {
    catalog: C,
    cache: IndexCache,
    config: EngineConfig,
}

impl<C> HybridSearchEngine<C> where C: CatalogStore {
    pub fn new(catalog: C, config: EngineConfig) -> Result<Self> {
        Self::with_text_config(catalog, config, TextConfig::default())
    }

    pub fn with_text_config(catalog: C, config: EngineConfig, text: TextConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { catalog, cache: IndexCache::new(Normalizer::new(), text), config })
    }

    pub fn from_settings(catalog: C, settings: &Settings) -> Result<Self> {
        Self::with_text_config(catalog, settings.engine, settings.text)
    }

    /// All records scoring above the threshold, best first.
    pub fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let index = self.index()?;
        let results: Vec<SearchResult> = rank(&index, query, &self.config).iter().map(SearchResult::from).collect();
        debug!(query, results = results.len(), "search finished");
        Ok(results)
    }

    /// Like [`HybridSearchEngine::search`], truncated to the best `k`.
    pub fn search_top(&self, query: &str, k: usize) -> Result<Vec<SearchResult>> {
        let mut results = self.search(query)?;
        results.truncate(k);
        Ok(results)
    }

    /// Forget the cached index; the next search rebuilds from the catalog.
    /// Call this from the catalog write path.
    pub fn invalidate(&self) {
        self.cache.invalidate();
    }

    /// Rebuild now instead of on the next search.
    pub fn refresh(&self) -> Result<IndexStats> {
        Ok(self.cache.rebuild(&self.catalog)?.stats())
    }

    pub fn stats(&self) -> Result<IndexStats> {
        Ok(self.index()?.stats())
    }

    fn index(&self) -> Result<Arc<SearchIndex>> {
        self.cache.get_or_build(&self.catalog)
    }
}

impl<C> Searcher for HybridSearchEngine<C> where C: CatalogStore {
    fn search(&self, query: &str) -> Result<Vec<SearchResult>> { Self::search(self, query) }
}
