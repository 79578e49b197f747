//! Error types for the cleaning stage.

use thiserror::Error;

/// Result type for cleaning operations.
pub type Result<T> = std::result::Result<T, PrepError>;

/// Errors that can occur while cleaning a raw snapshot.
#[derive(Debug, Error)]
pub enum PrepError {
    /// A required input column is absent
    #[error("required column missing from input: {0}")]
    MissingColumn(String),

    /// A non-null price value had no numeric interpretation
    #[error("price has no numeric interpretation: {0:?}")]
    UnparseablePrice(String),

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}
