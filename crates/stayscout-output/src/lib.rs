//! Reporting and export for Stayscout training runs.
//!
//! Everything here is a pure consumer of tables the pipeline already
//! produced: neighbourhood price aggregation, the console training summary,
//! and CSV/JSON export of the feature-impact table.

#![forbid(unsafe_code)]

pub mod aggregate;
pub mod export;
pub mod report;

pub use aggregate::average_price_by_neighbourhood;
pub use export::{ExportFormat, OutputError, export_feature_impacts, export_report};
pub use report::{DEFAULT_TOP_FEATURES, TrainingReport, top_features};
