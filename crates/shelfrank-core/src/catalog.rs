//! Reference catalog stores: an in-process list and a JSON file on disk.

use anyhow::{Context, Result};
use parking_lot::RwLock;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::traits::CatalogStore;
use crate::types::CatalogRecord;

/// Catalog kept in memory. Writers append records; the search
/// side only ever takes snapshots through [`CatalogStore`].
#[derive(Default)]
pub struct InMemoryCatalog {
    records: RwLock<Vec<CatalogRecord>>,
}

impl InMemoryCatalog {
    pub fn new(records: Vec<CatalogRecord>) -> Self {
        Self { records: RwLock::new(records) }
    }

    pub fn push(&self, record: CatalogRecord) {
        self.records.write().push(record);
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl CatalogStore for InMemoryCatalog {
    fn fetch_all_records(&self) -> Result<Vec<CatalogRecord>> {
        Ok(self.records.read().clone())
    }
}

/// Catalog read from a JSON array of records on every fetch.
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogStore for JsonFileCatalog {
    fn fetch_all_records(&self) -> Result<Vec<CatalogRecord>> {
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read catalog {}", self.path.display()))?;
        let records: Vec<CatalogRecord> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse catalog {}", self.path.display()))?;
        debug!(path = %self.path.display(), records = records.len(), "loaded catalog");
        Ok(records)
    }
}
