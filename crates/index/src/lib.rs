//! fuzzyset inverted n-gram index.
//!
//! [`NgramIndex`] maps character grams of normalized item text to posting
//! lists of item identifiers. Items are registered at every gram size in a
//! configured `[min, max]` range; retrieval walks the same range from the
//! most specific (largest) size downward and stops at the first size that
//! produces any posting.
//!
//! The index is append-only and memory-resident. It stores identifiers, not
//! item text; the caller owns the mapping from [`ItemId`] back to whatever
//! was indexed, and is responsible for never handing the index an id it does
//! not also track itself.

mod error;
mod retrieval;

pub use crate::error::IndexError;

use canonical::ngrams;
use hashbrown::HashMap;

/// Identifier for an indexed item: its insertion position in the caller's
/// store, 0-indexed and stable for the lifetime of the set.
pub type ItemId = u32;

/// Inverted index from n-gram to the ids of items containing that gram.
#[derive(Debug)]
pub struct NgramIndex {
    postings: HashMap<String, Vec<ItemId>>,
    size_min: usize,
    size_max: usize,
}

impl NgramIndex {
    /// Create an empty index covering gram sizes `size_min..=size_max`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::InvalidConfig`] unless `1 <= size_min <= size_max`.
    pub fn new(size_min: usize, size_max: usize) -> Result<Self, IndexError> {
        if size_min < 1 {
            return Err(IndexError::InvalidConfig(format!(
                "ngram size min must be >= 1, got {size_min}"
            )));
        }
        if size_min > size_max {
            return Err(IndexError::InvalidConfig(format!(
                "ngram size min ({size_min}) must not exceed max ({size_max})"
            )));
        }
        Ok(Self {
            postings: HashMap::new(),
            size_min,
            size_max,
        })
    }

    /// Smallest gram size tried during retrieval fallback.
    pub fn size_min(&self) -> usize {
        self.size_min
    }

    /// Largest gram size; indexing and retrieval both start here.
    pub fn size_max(&self) -> usize {
        self.size_max
    }

    /// Register `id` under every gram of `normalized` at every configured
    /// size.
    ///
    /// Ids are appended, not set-inserted: a gram occurring twice in one
    /// item contributes two postings, which keeps the index usable for
    /// frequency-sensitive scoring downstream. There is no removal
    /// operation; the index is append-only.
    pub fn register(&mut self, normalized: &str, id: ItemId) {
        for size in (self.size_min..=self.size_max).rev() {
            let grams =
                ngrams(normalized, size).expect("gram sizes are validated at construction");
            for gram in grams {
                self.postings.entry(gram).or_default().push(id);
            }
        }
    }

    /// Posting list for a single gram, if any item contains it.
    pub fn lookup(&self, gram: &str) -> Option<&[ItemId]> {
        self.postings.get(gram).map(Vec::as_slice)
    }

    /// Number of distinct grams currently indexed.
    pub fn gram_count(&self) -> usize {
        self.postings.len()
    }
}
