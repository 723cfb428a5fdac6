//! Shared error type.

use thiserror::Error;

/// Errors raised by `am-core`.  Sub-crates wrap it with `#[from]`.
#[derive(Debug, Error)]
pub enum AmError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `am-core`.
pub type AmResult<T> = Result<T, AmError>;
