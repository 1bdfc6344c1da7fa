//! shelfrank-hybrid
//!
//! Linear fusion of the TF-IDF and approximate-match channels, and the
//! engine façade the calling layer talks to.

pub mod engine;
pub mod fusion;

pub use engine::HybridSearchEngine;
pub use fusion::rank;
