use thiserror::Error;

/// Errors produced by the index layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// Gram size bounds rejected at construction.
    #[error("invalid index config: {0}")]
    InvalidConfig(String),
}
