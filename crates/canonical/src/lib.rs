//! fuzzyset text layer.
//!
//! This crate holds the two pure text operations every other stage builds on:
//! normalization and n-gram decomposition. Both are deterministic functions of
//! their input with no I/O, no clock calls, and no locale dependence.
//!
//! ## What we do
//!
//! - [`normalize`]: canonicalize a string for indexing and comparison by
//!   dropping everything that is not a word character or a space and
//!   lowercasing the rest. Total and idempotent.
//! - [`ngrams`]: break a string into overlapping fixed-length grams, with a
//!   sentinel pad on each side so grams anchored at the string boundaries stay
//!   distinguishable from interior ones.
//!
//! ## Invariants worth knowing
//!
//! - `normalize(normalize(x)) == normalize(x)` for every input.
//! - `ngrams` errors only on a zero gram size; short inputs produce an empty
//!   vector, never an error.
//! - `ngrams` operates on raw text. Callers that want grams of a normalized
//!   string normalize first; the function itself is general-purpose.

mod error;
mod ngram;
mod normalize;

pub use crate::error::CanonicalError;
pub use crate::ngram::{ngrams, PAD};
pub use crate::normalize::normalize;
