//! Domain types shared by the normalizer, the vector index and rank fusion.

use serde::{Deserialize, Deserializer, Serialize};

pub type RecordId = String;

/// One catalog listing as supplied by the external catalog store.
///
/// Text fields are optional because the store may hold rows with missing or
/// null columns. Absent fields read as the empty string everywhere the engine
/// concatenates them. `user_id` and `image_filename` are passed through to
/// results untouched and never take part in scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    /// Missing or null ids read as the empty string.
    #[serde(default, deserialize_with = "id_from_string_or_number")]
    pub id: RecordId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_filename: Option<String>,
}

impl CatalogRecord {
    pub fn new(
        id: impl Into<RecordId>,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        condition: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: Some(title.into()),
            author: Some(author.into()),
            genre: Some(genre.into()),
            condition: Some(condition.into()),
            user_id: None,
            image_filename: None,
        }
    }

    pub fn title(&self) -> &str { self.title.as_deref().unwrap_or("") }
    pub fn author(&self) -> &str { self.author.as_deref().unwrap_or("") }
    pub fn genre(&self) -> &str { self.genre.as_deref().unwrap_or("") }
    pub fn condition(&self) -> &str { self.condition.as_deref().unwrap_or("") }

    /// Text fed to the vector indexer: title, author, genre, condition.
    pub fn indexed_text(&self) -> String {
        [self.title(), self.author(), self.genre(), self.condition()].join(" ")
    }

    /// Text fed to the approximate matcher: title, author, genre.
    pub fn matchable_text(&self) -> String {
        [self.title(), self.author(), self.genre()].join(" ")
    }
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<RecordId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
        Uint(u64),
    }

    Ok(match Option::<RawId>::deserialize(deserializer)? {
        Some(RawId::Text(s)) => s,
        Some(RawId::Int(n)) => n.to_string(),
        Some(RawId::Uint(n)) => n.to_string(),
        None => RecordId::new(),
    })
}

/// A corpus record with the scores one query assigned to it.
///
/// `position` is the record's index in the corpus snapshot; rank fusion uses
/// it only to keep ties in corpus order.
#[derive(Debug, Clone, Copy)]
pub struct ScoredRecord<'a> {
    pub record: &'a CatalogRecord,
    pub position: usize,
    pub lexical: f32,
    pub fuzzy: f32,
    pub combined: f32,
}

/// What the calling layer receives for each hit.
///
/// `score` is the combined score rounded to three decimals for display; the
/// channel scores are left unrounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(flatten)]
    pub record: CatalogRecord,
    pub score: f32,
    pub lexical: f32,
    pub fuzzy: f32,
}

impl From<&ScoredRecord<'_>> for SearchResult {
    fn from(scored: &ScoredRecord<'_>) -> Self {
        Self {
            record: scored.record.clone(),
            score: round_to_thousandths(scored.combined),
            lexical: scored.lexical,
            fuzzy: scored.fuzzy,
        }
    }
}

pub fn round_to_thousandths(value: f32) -> f32 {
    (value * 1000.0).round() / 1000.0
}
