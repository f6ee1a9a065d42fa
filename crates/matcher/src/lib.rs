//! # fuzzyset matcher
//!
//! ## Purpose
//!
//! `matcher` sits on top of the text layer (`canonical`), the inverted
//! n-gram index (`index`), and the scoring boundary (`similarity`). It owns
//! the item store and drives the full lookup pipeline: normalize the query,
//! short-circuit on an exact normalized hit, otherwise retrieve candidates
//! at shrinking gram resolutions and rank them by similarity.
//!
//! ## Core Types
//!
//! - [`SetConfig`]: gram size range and the `all_matches` retrieval policy.
//! - [`FuzzySet`]: the fuzzy-searchable set of strings.
//! - [`RankedMatch`]: matched text plus its similarity score.
//! - [`MatchError`]: configuration and text-layer failures.
//!
//! ## Example Usage
//!
//! ```
//! use matcher::FuzzySet;
//!
//! let mut states = FuzzySet::new();
//! states.add("Michigan").add("Wisconsin");
//!
//! assert_eq!(states.exact_match("michigan!"), Some("Michigan"));
//! assert_eq!(states.get("mischigen"), ["Michigan", "Wisconsin"]);
//! ```
//!
//! ## Observability
//!
//! Install a [`MatchMetrics`] implementation via [`set_match_metrics`] to
//! record per-operation latency and result counts. This is typically done
//! once at startup so every set in the process shares the same backend.

pub mod engine;
pub mod metrics;
pub mod types;

pub use crate::engine::FuzzySet;
pub use crate::metrics::{set_match_metrics, MatchMetrics};
pub use crate::types::{MatchError, RankedMatch, SetConfig};
