use super::*;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::metrics::{set_match_metrics, MatchMetrics};

fn states() -> FuzzySet {
    FuzzySet::from_items(
        ["Michigan", "Minnesota", "Mississippi", "Missouri", "Wisconsin"],
        SetConfig::default(),
    )
    .expect("default config is valid")
}

#[test]
fn from_items_takes_initial_elements() {
    let set = FuzzySet::from_items(["foo", "bar"], SetConfig::default()).expect("valid config");
    assert!(!set.is_empty());
    assert_eq!(set.len(), 2);
}

#[test]
fn add_single_items() {
    let mut set = FuzzySet::new();
    for word in ["foo", "bar", "baz"] {
        set.add(word);
        assert!(set.contains(word));
    }
    assert_eq!(set.len(), 3);
}

#[test]
fn add_chains() {
    let mut set = FuzzySet::new();
    set.add("foo").add("bar").add("baz");
    assert_eq!(set.len(), 3);
}

#[test]
fn duplicate_raw_text_is_skipped() {
    let mut set = FuzzySet::new();
    set.add("foo").add("bar");
    assert_eq!(set.len(), 2);
    set.add("foo");
    assert_eq!(set.len(), 2);
}

#[test]
fn normalized_collision_keeps_first() {
    let mut set = FuzzySet::new();
    set.add("Foobar");
    // Same normalized form, different raw text: the later insertion is
    // skipped rather than silently replacing the stored original.
    set.add("foobar!");
    assert_eq!(set.len(), 1);
    assert!(set.contains("Foobar"));
    assert!(!set.contains("foobar!"));
    assert_eq!(set.exact_match("foobar"), Some("Foobar"));
}

#[test]
fn extend_and_from_iterator_insert_in_bulk() {
    let mut set = FuzzySet::new();
    set.extend(["foo", "bar"]);
    assert_eq!(set.len(), 2);

    let collected: FuzzySet = ["foo", "bar", "foo"].into_iter().collect();
    assert_eq!(collected.len(), 2);
}

#[test]
fn exact_match_misses_on_empty_set() {
    let set = FuzzySet::new();
    assert_eq!(set.exact_match("Foo"), None);
}

#[test]
fn exact_match_normalizes_and_denormalizes() {
    let mut set = FuzzySet::new();
    set.add("Foobar");
    assert_eq!(set.exact_match("Foobar"), Some("Foobar"));
    assert_eq!(set.exact_match("foobar"), Some("Foobar"));
    assert_eq!(set.exact_match("FooBar!"), Some("Foobar"));
    assert_eq!(set.exact_match("other"), None);
}

#[test]
fn get_finds_fuzzy_candidates() {
    let set = states();
    let hits = set.get("mischigen");
    assert!(hits.iter().any(|hit| hit == "Michigan"), "hits: {hits:?}");
}

#[test]
fn get_returns_empty_when_nothing_matches() {
    let set = FuzzySet::from_items(["foo", "bar", "baz"], SetConfig::default())
        .expect("valid config");
    assert!(set.get("something").is_empty());
}

#[test]
fn get_sorts_results_by_similarity() {
    let set = states();
    assert_eq!(
        set.get("missipissi"),
        ["Mississippi", "Missouri", "Michigan", "Minnesota"]
    );
}

#[test]
fn get_short_circuits_on_exact_hit() {
    let set = FuzzySet::from_items(["foo", "foobar"], SetConfig::default())
        .expect("valid config");
    // "foobar" shares grams with "foo" but the exact hit wins alone.
    assert_eq!(set.get("foo"), ["foo"]);
}

#[test]
fn all_matches_disables_the_short_circuit() {
    let cfg = SetConfig {
        all_matches: true,
        ..SetConfig::default()
    };
    let set = FuzzySet::from_items(["foo", "foobar"], cfg).expect("valid config");
    assert_eq!(set.get("foo"), ["foo", "foobar"]);
}

#[test]
fn retrieval_falls_back_to_smaller_gram_sizes() {
    let mut set = FuzzySet::new();
    set.add("aaaaaaaabaaa");
    // No trigram of the query appears in the item; the bigram pass finds it.
    assert_eq!(set.get("abba"), ["aaaaaaaabaaa"]);
}

#[test]
fn ranked_exposes_descending_scores() {
    let set = states();
    let hits = set.ranked("missipissi");
    assert_eq!(hits.len(), 4);
    for pair in hits.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    assert_eq!(hits[0].text, "Mississippi");
    assert!(hits[0].score > 0.7);
}

#[test]
fn ranked_scores_exact_hit_as_one() {
    let mut set = FuzzySet::new();
    set.add("Foobar");
    let hits = set.ranked("FOOBAR");
    assert_eq!(hits.len(), 1);
    assert!((hits[0].score - 1.0).abs() < f64::EPSILON);
}

#[test]
fn contains_compares_raw_text_only() {
    let mut set = FuzzySet::new();
    set.add("Foobar");
    assert!(set.contains("Foobar"));
    assert!(!set.contains("foobar"));
    assert!(!set.contains("bar"));
}

#[test]
fn len_and_is_empty_track_insertions() {
    let mut set = FuzzySet::new();
    assert_eq!(set.len(), 0);
    assert!(set.is_empty());
    set.add("foo");
    assert_eq!(set.len(), 1);
    set.add("bar");
    assert_eq!(set.len(), 2);
    assert!(!set.is_empty());
}

#[test]
fn iter_yields_insertion_order() {
    let mut set = FuzzySet::new();
    set.add("b").add("a").add("c");
    let items: Vec<&str> = set.iter().collect();
    assert_eq!(items, ["b", "a", "c"]);
}

#[test]
fn invalid_config_rejected_at_construction() {
    let cfg = SetConfig {
        ngram_size_min: 3,
        ngram_size_max: 2,
        ..SetConfig::default()
    };
    let err = FuzzySet::with_config(cfg).expect_err("bounds are inverted");
    assert!(matches!(err, MatchError::InvalidConfig(_)));

    let cfg = SetConfig {
        ngram_size_min: 0,
        ngram_size_max: 3,
        ..SetConfig::default()
    };
    assert!(FuzzySet::with_config(cfg).is_err());
}

struct ReverseLength;

impl Similarity for ReverseLength {
    // Deliberately rank shorter normalized forms higher, to prove the
    // scorer seam is honored.
    fn score(&self, _query: &str, candidate: &str) -> f64 {
        1.0 / (candidate.len() as f64 + 1.0)
    }
}

#[test]
fn custom_scorer_drives_the_ranking() {
    let cfg = SetConfig {
        all_matches: true,
        ..SetConfig::default()
    };
    let mut set = FuzzySet::with_scorer(cfg, Box::new(ReverseLength)).expect("valid config");
    set.add("foobar").add("foo");
    assert_eq!(set.get("foo"), ["foo", "foobar"]);
}

#[derive(Default)]
struct CountingMetrics {
    events: Arc<RwLock<Vec<&'static str>>>,
}

impl CountingMetrics {
    fn snapshot(&self) -> Vec<&'static str> {
        self.events.read().unwrap().clone()
    }
}

impl MatchMetrics for CountingMetrics {
    fn record_add(&self, _latency: Duration, added: bool) {
        let label = if added { "add_ok" } else { "add_skip" };
        self.events.write().unwrap().push(label);
    }

    fn record_get(&self, _latency: Duration, results: usize) {
        let label = if results > 0 { "get_hit" } else { "get_miss" };
        self.events.write().unwrap().push(label);
    }
}

#[test]
fn metrics_recorder_observes_operations() {
    let metrics = Arc::new(CountingMetrics::default());
    set_match_metrics(Some(metrics.clone()));

    let mut set = FuzzySet::new();
    set.add("foo");
    set.add("foo");
    let _ = set.get("foo");
    let _ = set.get("unrelated");

    set_match_metrics(None);

    let events = metrics.snapshot();
    assert!(events.contains(&"add_ok"));
    assert!(events.contains(&"add_skip"));
    assert!(events.contains(&"get_hit"));
    assert!(events.contains(&"get_miss"));
}
