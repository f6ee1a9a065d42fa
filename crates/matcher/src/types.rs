use canonical::CanonicalError;
use index::IndexError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for a [`FuzzySet`](crate::FuzzySet).
///
/// `SetConfig` is cheap to clone and serde-friendly so it can be embedded in
/// higher-level configs. It is validated once, at set construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SetConfig {
    /// Smallest gram size tried during retrieval fallback. Must be >= 1 and
    /// <= `ngram_size_max`.
    #[serde(default = "SetConfig::default_ngram_size_min")]
    pub ngram_size_min: usize,
    /// Largest gram size. Used for indexing and tried first at retrieval.
    #[serde(default = "SetConfig::default_ngram_size_max")]
    pub ngram_size_max: usize,
    /// When true, `get` always runs full candidate retrieval and ranking
    /// and returns every ranked candidate, instead of short-circuiting to a
    /// single exact hit.
    #[serde(default)]
    pub all_matches: bool,
}

impl SetConfig {
    pub(crate) fn default_ngram_size_min() -> usize {
        2
    }

    pub(crate) fn default_ngram_size_max() -> usize {
        3
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.ngram_size_min < 1 {
            return Err(MatchError::InvalidConfig(
                "ngram_size_min must be >= 1".into(),
            ));
        }
        if self.ngram_size_max < 1 {
            return Err(MatchError::InvalidConfig(
                "ngram_size_max must be >= 1".into(),
            ));
        }
        if self.ngram_size_min > self.ngram_size_max {
            return Err(MatchError::InvalidConfig(
                "ngram_size_min must not exceed ngram_size_max".into(),
            ));
        }
        Ok(())
    }
}

impl Default for SetConfig {
    fn default() -> Self {
        Self {
            ngram_size_min: Self::default_ngram_size_min(),
            ngram_size_max: Self::default_ngram_size_max(),
            all_matches: false,
        }
    }
}

/// A single ranked hit returned by [`FuzzySet::ranked`](crate::FuzzySet::ranked).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedMatch {
    /// Original (denormalized) text, exactly as it was added to the set.
    pub text: String,
    /// Similarity between the normalized query and this item's normalized
    /// form, in `[0.0, 1.0]`.
    pub score: f64,
}

/// Errors produced by the matching layer.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Invalid set configuration.
    #[error("invalid set config: {0}")]
    InvalidConfig(String),
    /// Text-layer failure (gram decomposition).
    #[error("canonical error: {0}")]
    Canonical(#[from] CanonicalError),
    /// Index construction failed.
    #[error("index error: {0}")]
    Index(#[from] IndexError),
}
