use std::sync::Arc;

use crate::error::Result;
use crate::types::{CatalogRecord, SearchResult};

/// Read-only access to the external catalog store.
pub trait CatalogStore: Send + Sync {
    /// Full current snapshot of the catalog, in store order.
    fn fetch_all_records(&self) -> anyhow::Result<Vec<CatalogRecord>>;
}

impl<T: CatalogStore + ?Sized> CatalogStore for Arc<T> {
    fn fetch_all_records(&self) -> anyhow::Result<Vec<CatalogRecord>> {
        (**self).fetch_all_records()
    }
}

impl<T: CatalogStore + ?Sized> CatalogStore for &T {
    fn fetch_all_records(&self) -> anyhow::Result<Vec<CatalogRecord>> {
        (**self).fetch_all_records()
    }
}

/// The contract offered to the calling layer.
pub trait Searcher: Send + Sync {
    fn search(&self, query: &str) -> Result<Vec<SearchResult>>;
}
