//! shelfrank-text
//!
//! Text-level building blocks: the normalization pipeline shared by corpus
//! and queries, and the character-level approximate matcher.

pub mod analyzer;
pub mod fuzzy;
pub mod lemmatize;
pub mod normalize;

pub use fuzzy::{fuzzy_score, partial_ratio};
pub use normalize::Normalizer;
