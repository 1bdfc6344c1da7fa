//! shelfrank-vector
//!
//! TF-IDF vector space over the catalog and the cache that owns the current
//! index. See `index` for the weighting scheme and `cache` for the build guard.

pub mod cache;
pub mod index;
pub mod sparse;
pub mod vocabulary;

pub use cache::IndexCache;
pub use index::{IndexStats, SearchIndex};
pub use sparse::SparseVector;
pub use vocabulary::Vocabulary;
