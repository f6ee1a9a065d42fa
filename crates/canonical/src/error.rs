use thiserror::Error;

/// Errors produced by the text layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    #[error("ngram size must be >= 1, got {0}")]
    InvalidNgramSize(usize),
}
