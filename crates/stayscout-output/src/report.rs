//! Human-readable and serializable training summaries.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use stayscout_model::{FeatureImpact, Metrics};

/// Number of features shown in summaries by default.
pub const DEFAULT_TOP_FEATURES: usize = 12;

/// Leading `k` rows of a feature-impact table.
///
/// The input is already sorted by magnitude, so this is a plain prefix.
pub fn top_features(impacts: &[FeatureImpact], k: usize) -> &[FeatureImpact] {
    &impacts[..k.min(impacts.len())]
}

/// Summary of one training run, for console output or a JSON payload.
#[derive(Debug, Clone, Serialize)]
pub struct TrainingReport {
    /// City the snapshot covers.
    pub city: String,

    /// Snapshot export date.
    pub snapshot_date: NaiveDate,

    /// Listings that survived cleaning.
    pub listings: usize,

    /// Evaluation metrics.
    pub metrics: Metrics,

    /// Leading features by price impact.
    pub top_features: Vec<FeatureImpact>,
}

impl TrainingReport {
    /// Build a report, keeping the default number of top features.
    pub fn new(
        city: String,
        snapshot_date: NaiveDate,
        listings: usize,
        metrics: Metrics,
        impacts: &[FeatureImpact],
    ) -> Self {
        Self {
            city,
            snapshot_date,
            listings,
            metrics,
            top_features: top_features(impacts, DEFAULT_TOP_FEATURES).to_vec(),
        }
    }
}

impl fmt::Display for TrainingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Training summary: {} ({})",
            self.city, self.snapshot_date
        )?;
        writeln!(f, "  Listings used: {}", self.listings)?;
        writeln!(f, "  RMSE: {:.2}", self.metrics.rmse)?;
        writeln!(f, "  R2:   {:.4}", self.metrics.r2)?;
        writeln!(f, "  Top features by price impact:")?;
        for impact in &self.top_features {
            writeln!(f, "    {:<45} {:>10.2}", impact.feature, impact.coefficient)?;
        }
        Ok(())
    }
}
