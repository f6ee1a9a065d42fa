use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use canonical::normalize;
use index::{ItemId, NgramIndex};
use similarity::{NgramCosine, Similarity};
use tracing::debug;

use crate::metrics::MetricsSpan;
use crate::types::{MatchError, RankedMatch, SetConfig};

#[cfg(test)]
mod tests;

/// A fuzzy-searchable set of strings.
///
/// As a set, it cannot contain duplicate elements; duplicates are skipped
/// silently on insertion. Items are stored exactly as given, while all
/// indexing and comparison happens over their normalized forms, so lookups
/// are case- and punctuation-insensitive and always return the original
/// text.
///
/// The set is append-only: there is no update or delete. Build it once,
/// query it many times. All state is private to the instance; wrap the
/// whole set in a single lock if it must be shared across threads, since
/// `add` touches several internal structures non-atomically.
pub struct FuzzySet {
    config: SetConfig,
    items: Vec<String>,
    exact: HashMap<String, ItemId>,
    index: NgramIndex,
    scorer: Box<dyn Similarity>,
}

impl FuzzySet {
    /// Create an empty set with the default configuration.
    pub fn new() -> Self {
        Self::with_config(SetConfig::default()).expect("default config is valid")
    }

    /// Create an empty set with an explicit configuration.
    ///
    /// The default scorer ranks at `ngram_size_max` so ranking sees the
    /// same resolution the index prefers.
    pub fn with_config(config: SetConfig) -> Result<Self, MatchError> {
        config.validate()?;
        let scorer = NgramCosine::new(config.ngram_size_max)?;
        Self::with_scorer(config, Box::new(scorer))
    }

    /// Create a set with a custom similarity scorer.
    pub fn with_scorer(
        config: SetConfig,
        scorer: Box<dyn Similarity>,
    ) -> Result<Self, MatchError> {
        config.validate()?;
        let index = NgramIndex::new(config.ngram_size_min, config.ngram_size_max)?;
        Ok(Self {
            config,
            items: Vec::new(),
            exact: HashMap::new(),
            index,
            scorer,
        })
    }

    /// Build a set from an iterator of items with the given configuration.
    pub fn from_items<I, S>(items: I, config: SetConfig) -> Result<Self, MatchError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::with_config(config)?;
        set.extend(items);
        Ok(set)
    }

    /// The configuration this set was built with.
    pub fn config(&self) -> &SetConfig {
        &self.config
    }

    /// Add one item to the set, returning `&mut Self` so insertions chain.
    ///
    /// An item whose normalized form is already present is skipped without
    /// error; a raw-text duplicate always collides on its normalized form,
    /// so one probe covers both. The earlier denormalization wins.
    pub fn add<S: Into<String>>(&mut self, item: S) -> &mut Self {
        let span = MetricsSpan::start();
        let added = self.insert(item.into());
        if let Some(span) = span {
            span.record_add(added);
        }
        self
    }

    fn insert(&mut self, item: String) -> bool {
        let normalized = normalize(&item);
        if self.exact.contains_key(&normalized) {
            debug!(item = %item, "normalized form already present, skipping");
            return false;
        }

        let id = self.items.len() as ItemId;
        self.index.register(&normalized, id);
        self.exact.insert(normalized, id);
        self.items.push(item);
        true
    }

    /// Normalize `query` and look up an entry by its normalized form.
    ///
    /// Returns the matched original text. Never touches the gram index and
    /// ignores `all_matches`.
    pub fn exact_match(&self, query: &str) -> Option<&str> {
        self.exact
            .get(&normalize(query))
            .map(|&id| self.items[id as usize].as_str())
    }

    /// Fuzzy lookup returning the matched original strings, best first.
    ///
    /// Unless `all_matches` is set, an exact normalized hit short-circuits
    /// the whole retrieval pipeline and comes back alone.
    pub fn get(&self, query: &str) -> Vec<String> {
        self.ranked(query).into_iter().map(|hit| hit.text).collect()
    }

    /// Fuzzy lookup exposing similarity scores.
    ///
    /// Hits are sorted by descending score. The order of equal-scored hits
    /// is not specified; callers must not rely on it.
    pub fn ranked(&self, query: &str) -> Vec<RankedMatch> {
        let span = MetricsSpan::start();
        let hits = self.ranked_inner(query);
        if let Some(span) = span {
            span.record_get(hits.len());
        }
        hits
    }

    fn ranked_inner(&self, query: &str) -> Vec<RankedMatch> {
        let normalized = normalize(query);

        if !self.config.all_matches {
            if let Some(&id) = self.exact.get(&normalized) {
                return vec![RankedMatch {
                    text: self.items[id as usize].clone(),
                    score: 1.0,
                }];
            }
        }

        let mut ids = self.index.candidates(&normalized);
        ids.sort_unstable();
        ids.dedup();
        debug!(candidates = ids.len(), "ranking candidates");

        let mut hits: Vec<RankedMatch> = ids
            .into_iter()
            .map(|id| {
                let text = &self.items[id as usize];
                let score = self.scorer.score(&normalized, &normalize(text));
                RankedMatch {
                    text: text.clone(),
                    score,
                }
            })
            .collect();
        hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        hits
    }

    /// `true` iff `raw` was added exactly as given. No normalization.
    pub fn contains(&self, raw: &str) -> bool {
        self.items.iter().any(|item| item.as_str() == raw)
    }

    /// Number of items in the set.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` when the set holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate the original items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}

impl Default for FuzzySet {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Into<String>> Extend<S> for FuzzySet {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for FuzzySet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl fmt::Debug for FuzzySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FuzzySet")
            .field("config", &self.config)
            .field("len", &self.items.len())
            .finish_non_exhaustive()
    }
}
