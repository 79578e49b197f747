//! Error types for the modeling stage.

use thiserror::Error;

/// Result type for modeling operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur during baseline training.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Not enough rows for a non-degenerate train/test split
    #[error("too few rows for training: got {rows}, need at least {min}")]
    TooFewRows {
        /// Rows in the input table
        rows: usize,
        /// Minimum required
        min: usize,
    },

    /// A feature or target column is absent
    #[error("column missing from clean table: {0}")]
    MissingColumn(String),

    /// A null slipped into a column the cleaning stage guarantees non-null
    #[error("unexpected missing value in column: {column}")]
    MissingValue {
        /// Offending column
        column: String,
    },

    /// Feature matrix and target vector disagree on row count
    #[error("feature rows ({rows}) do not match target length ({targets})")]
    ShapeMismatch {
        /// Feature matrix rows
        rows: usize,
        /// Target vector length
        targets: usize,
    },

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}
