use shelfrank_core::config::EngineConfig;
use shelfrank_core::types::{round_to_thousandths, ScoredRecord};
use shelfrank_text::fuzzy_score;
use shelfrank_vector::SearchIndex;

/// Score every record in `index` against `query` and keep those above the
/// threshold, best first.
///
/// `combined = lexical_weight * cosine + fuzzy_weight * partial_ratio`.
/// The threshold applies to the full-precision score, but ordering uses the
/// score as displayed (rounded to 3 decimals). The sort is stable, so records
/// showing the same score keep corpus order. A blank query or an empty index
/// yields no results.
pub fn rank<'a>(index: &'a SearchIndex, query: &str, config: &EngineConfig) -> Vec<ScoredRecord<'a>> {
    if query.trim().is_empty() || index.is_empty() {
        return Vec::new();
    }
    let projected = index.project_query(query);

    let mut hits: Vec<ScoredRecord<'a>> = index
        .records()
        .iter()
        .enumerate()
        .filter_map(|(position, record)| {
            let lexical = index.cosine(position, &projected);
            let fuzzy = fuzzy_score(query, record);
            let combined = (config.lexical_weight * lexical + config.fuzzy_weight * fuzzy).clamp(0.0, 1.0);
            (combined > config.threshold).then_some(ScoredRecord { record, position, lexical, fuzzy, combined })
        })
        .collect();

    sort_by_displayed_score(&mut hits);
    hits
}

fn sort_by_displayed_score(hits: &mut [ScoredRecord<'_>]) {
    hits.sort_by(|a, b| round_to_thousandths(b.combined).total_cmp(&round_to_thousandths(a.combined)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelfrank_core::types::CatalogRecord;

    #[test]
    fn equal_displayed_scores_keep_corpus_order() {
        let record = CatalogRecord::default();
        let hit = |position, combined| ScoredRecord { record: &record, position, lexical: 0.0, fuzzy: 0.0, combined };
        let mut hits = vec![hit(0, 0.3451), hit(1, 0.3454), hit(2, 0.5), hit(3, 0.3444)];
        sort_by_displayed_score(&mut hits);
        let order: Vec<usize> = hits.iter().map(|h| h.position).collect();
        assert_eq!(order, vec![2, 0, 1, 3]);
    }
}
