use std::collections::HashMap;

pub type DimId = u32;

/// Token to dimension mapping. Ids are handed out in first-seen order, so
/// two builds over the same corpus assign identical ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    ids: HashMap<String, DimId>,
    terms: Vec<String>,
}

impl Vocabulary {
    pub fn new() -> Self { Self::default() }

    /// Id for `token`, allocating a new dimension when unseen.
    pub fn intern(&mut self, token: &str) -> DimId {
        if let Some(&id) = self.ids.get(token) {
            return id;
        }
        let id = DimId::try_from(self.terms.len()).unwrap_or(DimId::MAX);
        self.ids.insert(token.to_string(), id);
        self.terms.push(token.to_string());
        id
    }

    pub fn get(&self, token: &str) -> Option<DimId> { self.ids.get(token).copied() }

    pub fn len(&self) -> usize { self.terms.len() }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }

    pub fn terms(&self) -> impl Iterator<Item = &str> { self.terms.iter().map(String::as_str) }
}
