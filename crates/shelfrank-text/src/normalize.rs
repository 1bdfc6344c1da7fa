use tantivy::tokenizer::{TextAnalyzer, TokenStream};

use crate::analyzer::{build_analyzer, is_stop_word};
use crate::lemmatize::lemmatize;

/// The text-cleaning pipeline applied to corpus documents and to queries.
///
/// Lower-case, drop every character that is neither alphanumeric nor
/// whitespace, split on whitespace, remove stopwords, lemmatize. A token that
/// lemmatizes to a stopword is dropped as well, so feeding the re-joined
/// output back in yields the same tokens.
#[derive(Clone)]
pub struct Normalizer {
    analyzer: TextAnalyzer,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer").finish_non_exhaustive()
    }
}

impl Normalizer {
    pub fn new() -> Self {
        Self { analyzer: build_analyzer() }
    }

    pub fn normalize(&self, text: &str) -> Vec<String> {
        let cleaned = strip_punctuation(&text.to_lowercase());
        let mut analyzer = self.analyzer.clone();
        let mut stream = analyzer.token_stream(&cleaned);
        let mut tokens = Vec::new();
        while let Some(token) = stream.next() {
            let lemma = lemmatize(&token.text);
            if !is_stop_word(&lemma) {
                tokens.push(lemma);
            }
        }
        tokens
    }
}

fn strip_punctuation(text: &str) -> String {
    text.chars()
        .filter_map(|c| {
            if c.is_whitespace() {
                Some(' ')
            } else if c.is_alphanumeric() {
                Some(c)
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::strip_punctuation;

    #[test]
    fn punctuation_is_removed_not_replaced() {
        assert_eq!(strip_punctuation("sci-fi, (2nd\ted.)"), "scifi 2nd ed");
    }
}
