//! CSV and JSON export of training artifacts.

use crate::report::TrainingReport;
use std::fs::File;
use std::path::Path;
use stayscout_model::FeatureImpact;
use thiserror::Error;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum OutputError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// Invalid format error.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }
}

/// Write the feature-impact table to a file.
pub fn export_feature_impacts(
    path: &Path,
    impacts: &[FeatureImpact],
    format: ExportFormat,
) -> Result<(), OutputError> {
    match format {
        ExportFormat::Csv => {
            let mut writer = csv::Writer::from_path(path)?;
            for impact in impacts {
                writer.serialize(impact)?;
            }
            writer.flush()?;
        }
        ExportFormat::Json => serde_json::to_writer(File::create(path)?, impacts)?,
        ExportFormat::PrettyJson => serde_json::to_writer_pretty(File::create(path)?, impacts)?,
    }
    Ok(())
}

/// Write a training report to a file.
///
/// Reports nest metrics and a feature list, so only the JSON formats apply.
pub fn export_report(
    path: &Path,
    report: &TrainingReport,
    format: ExportFormat,
) -> Result<(), OutputError> {
    match format {
        ExportFormat::Csv => Err(OutputError::InvalidFormat(
            "training reports support JSON formats only".to_string(),
        )),
        ExportFormat::Json => Ok(serde_json::to_writer(File::create(path)?, report)?),
        ExportFormat::PrettyJson => Ok(serde_json::to_writer_pretty(File::create(path)?, report)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use stayscout_model::Metrics;

    fn impacts() -> Vec<FeatureImpact> {
        vec![
            FeatureImpact {
                feature: "bedrooms".to_string(),
                coefficient: 42.5,
                abs_coeff: 42.5,
            },
            FeatureImpact {
                feature: "room_type=Private room".to_string(),
                coefficient: -17.25,
                abs_coeff: 17.25,
            },
        ]
    }

    #[test]
    fn extensions() {
        assert_eq!(ExportFormat::Csv.extension(), "csv");
        assert_eq!(ExportFormat::Json.extension(), "json");
        assert_eq!(ExportFormat::PrettyJson.extension(), "json");
    }

    #[test]
    fn csv_export_round_trips() {
        let dir = std::env::temp_dir().join("stayscout_export_csv_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("impacts.csv");

        export_feature_impacts(&path, &impacts(), ExportFormat::Csv).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let restored: Vec<FeatureImpact> = reader
            .deserialize()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(restored, impacts());
    }

    #[test]
    fn json_export_round_trips() {
        let dir = std::env::temp_dir().join("stayscout_export_json_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("impacts.json");

        export_feature_impacts(&path, &impacts(), ExportFormat::PrettyJson).unwrap();

        let restored: Vec<FeatureImpact> =
            serde_json::from_reader(File::open(&path).unwrap()).unwrap();
        assert_eq!(restored, impacts());
    }

    #[test]
    fn report_export_rejects_csv() {
        let report = TrainingReport::new(
            "asheville".to_string(),
            NaiveDate::from_ymd_opt(2025, 6, 18).unwrap(),
            1200,
            Metrics { rmse: 55.2, r2: 0.61 },
            &impacts(),
        );
        let dir = std::env::temp_dir().join("stayscout_export_report_test");
        std::fs::create_dir_all(&dir).unwrap();

        let err = export_report(&dir.join("report.csv"), &report, ExportFormat::Csv).unwrap_err();
        assert!(matches!(err, OutputError::InvalidFormat(_)));

        export_report(&dir.join("report.json"), &report, ExportFormat::Json).unwrap();
    }
}
