use canonical::ngrams;
use tracing::{debug, trace};

use crate::{ItemId, NgramIndex};

/// Candidate retrieval methods.
impl NgramIndex {
    /// Multi-resolution candidate retrieval for a normalized query.
    ///
    /// Starting at the largest configured size, decompose the query and
    /// union the posting lists of every resulting gram. The first size that
    /// produces any posting wins and smaller sizes are not consulted; they
    /// are tried only when every larger size comes up empty. Longer grams
    /// are more specific, so precision is traded for recall only as a last
    /// resort.
    ///
    /// The returned ids may contain duplicates (one per matching gram
    /// occurrence); deduplication is the caller's concern.
    pub fn candidates(&self, normalized_query: &str) -> Vec<ItemId> {
        for size in (self.size_min()..=self.size_max()).rev() {
            let grams =
                ngrams(normalized_query, size).expect("gram sizes are validated at construction");

            let mut ids = Vec::new();
            for gram in &grams {
                if let Some(postings) = self.lookup(gram) {
                    ids.extend_from_slice(postings);
                }
            }

            if !ids.is_empty() {
                trace!(size, candidates = ids.len(), "gram lookup hit");
                return ids;
            }
            if size > self.size_min() {
                debug!(size, "no postings at this gram size, shrinking");
            }
        }
        Vec::new()
    }
}
