use proptest::prelude::*;
use std::time::{Duration, Instant};

use shelfrank_core::types::CatalogRecord;
use shelfrank_text::{fuzzy_score, partial_ratio};

#[test]
fn exact_substring_is_a_perfect_match() {
    assert_eq!(partial_ratio("science fiction", "science fiction anthology various sci-fi"), 100);
    assert_eq!(partial_ratio("dune", "dune"), 100);
}

#[test]
fn argument_order_does_not_matter() {
    assert_eq!(partial_ratio("anthology", "the big anthology"), partial_ratio("the big anthology", "anthology"));
}

#[test]
fn typo_still_scores_high() {
    let score = partial_ratio("scince fiction", "science fiction anthology");
    assert!(score >= 85, "score={score}");
    assert!(score < 100);
}

#[test]
fn alignment_may_run_past_the_end_of_the_text() {
    assert_eq!(partial_ratio("fantasy novel", "the hobbit j.r.r. tolkien fantasy"), 70);
    assert_eq!(partial_ratio("fictionx", "science fiction"), 93);
    assert_eq!(partial_ratio("herbert classic", "dune frank herbert"), 64);
}

#[test]
fn reference_scores() {
    assert_eq!(partial_ratio("hobit tolkien", "the hobbit j.r.r. tolkien fantasy adventure"), 62);
    assert_eq!(partial_ratio("frnk herbrt", "dune frank herbert"), 82);
    assert_eq!(partial_ratio("prid and prejudice", "pride and prejudice jane austen romance"), 94);
    assert_eq!(partial_ratio("dnue", "dune frank herbert scifi"), 75);
    assert_eq!(partial_ratio("kitten", "sitting"), 67);
    assert_eq!(partial_ratio("xyz", "dune frank herbert"), 0);
}

#[test]
fn long_query_against_many_records_stays_fast() {
    let query = "a very long pasted description of a book about desert planets spice and sandworms ".repeat(12);
    assert_eq!(partial_ratio(&query, "dune frank herbert scifi"), 25);

    let record = CatalogRecord::new("1", "Dune", "Frank Herbert", "SciFi", "Good");
    let started = Instant::now();
    for _ in 0..500 {
        assert!((fuzzy_score(&query, &record) - 0.25).abs() < 1e-6);
    }
    assert!(started.elapsed() < Duration::from_secs(5), "took {:?}", started.elapsed());
}

#[test]
fn unrelated_text_scores_low() {
    assert!(partial_ratio("astrophysics", "cooking basics chef ramsay cookbook") < 60);
}

#[test]
fn empty_side_scores_zero() {
    assert_eq!(partial_ratio("", "anything"), 0);
    assert_eq!(partial_ratio("anything", ""), 0);
}

#[test]
fn fuzzy_score_ignores_condition_and_case() {
    let record = CatalogRecord::new("1", "Dune", "Frank Herbert", "Sci-Fi", "Mint");
    assert!((fuzzy_score("DUNE", &record) - 1.0).abs() < 1e-6);
    let by_condition = fuzzy_score("mint", &record);
    assert!(by_condition < 1.0);
}

#[test]
fn fuzzy_score_tolerates_missing_fields() {
    let record = CatalogRecord { id: "x".into(), ..CatalogRecord::default() };
    assert!(fuzzy_score("dune", &record) <= 0.5);
}

proptest! {
    #[test]
    fn partial_ratio_stays_in_range(a in "\\PC{0,20}", b in "\\PC{0,40}") {
        let r = partial_ratio(&a, &b);
        prop_assert!(r <= 100);
        if !a.is_empty() && a == b {
            prop_assert_eq!(r, 100);
        }
    }
}
