use proptest::prelude::*;

use shelfrank_core::catalog::InMemoryCatalog;
use shelfrank_core::config::{EngineConfig, TextConfig};
use shelfrank_core::types::{round_to_thousandths, CatalogRecord};
use shelfrank_hybrid::{rank, HybridSearchEngine};
use shelfrank_text::Normalizer;
use shelfrank_vector::SearchIndex;

const WORDS: &[&str] = &[
    "dune", "dragon", "dragons", "tales", "cooking", "basics", "science", "fiction", "history",
    "war", "peace", "the", "of", "good", "fair", "poor", "mystery", "Sci-Fi", "romance", "Stories",
];

fn phrase(max: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 0..max).prop_map(|w| w.join(" "))
}

fn record() -> impl Strategy<Value = CatalogRecord> {
    (phrase(4), phrase(3), phrase(2), phrase(2))
        .prop_map(|(title, author, genre, condition)| CatalogRecord::new("r", title, author, genre, condition))
}

fn corpus() -> impl Strategy<Value = Vec<CatalogRecord>> {
    prop::collection::vec(record(), 0..12).prop_map(|records| {
        records
            .into_iter()
            .enumerate()
            .map(|(i, r)| CatalogRecord { id: i.to_string(), ..r })
            .collect()
    })
}

proptest! {
    #[test]
    fn ranked_scores_are_bounded_sorted_and_above_threshold(records in corpus(), query in phrase(4)) {
        let config = EngineConfig::default();
        let index = SearchIndex::build(records, Normalizer::new(), &TextConfig::default());
        let hits = rank(&index, &query, &config);
        for hit in &hits {
            prop_assert!((0.0..=1.0).contains(&hit.combined));
            prop_assert!((0.0..=1.0).contains(&hit.lexical));
            prop_assert!((0.0..=1.0).contains(&hit.fuzzy));
            prop_assert!(hit.combined > config.threshold);
        }
        for pair in hits.windows(2) {
            let (first, second) = (round_to_thousandths(pair[0].combined), round_to_thousandths(pair[1].combined));
            prop_assert!(first >= second);
            if first == second {
                prop_assert!(pair[0].position < pair[1].position, "ties keep corpus order");
            }
        }
    }

    #[test]
    fn empty_corpus_never_matches(query in phrase(5)) {
        let engine = HybridSearchEngine::new(InMemoryCatalog::default(), EngineConfig::default()).unwrap();
        prop_assert!(engine.search(&query).unwrap().is_empty());
    }

    #[test]
    fn search_is_repeatable(records in corpus(), query in phrase(3)) {
        let engine = HybridSearchEngine::new(InMemoryCatalog::new(records), EngineConfig::default()).unwrap();
        let first = engine.search(&query).unwrap();
        let second = engine.search(&query).unwrap();
        prop_assert_eq!(first, second);
    }
}
