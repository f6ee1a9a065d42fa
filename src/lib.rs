//! Workspace umbrella crate for fuzzyset.
//!
//! This crate stitches together the text layer, the inverted n-gram index,
//! the similarity boundary, and the matcher so callers get the whole
//! fuzzy-lookup surface from a single import.

pub use canonical::{ngrams, normalize, CanonicalError};
pub use index::{IndexError, ItemId, NgramIndex};
pub use matcher::{
    set_match_metrics, FuzzySet, MatchError, MatchMetrics, RankedMatch, SetConfig,
};
pub use similarity::{NgramCosine, Similarity};

/// Crate version, baked in at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build a set over the bundled US state corpus and run `query` against it.
/// Useful for demos and integration smoke tests.
pub fn states_demo(query: &str) -> Result<Vec<String>, MatchError> {
    const STATES: &str = include_str!("../data/states.txt");

    let set = FuzzySet::from_items(STATES.lines(), SetConfig::default())?;
    Ok(set.get(query))
}
