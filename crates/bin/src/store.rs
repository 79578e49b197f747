//! Published results of completed training runs.

use chrono::NaiveDate;
use polars::prelude::DataFrame;
use stayscout_model::{FeatureImpact, Metrics};
use stayscout_output::TrainingReport;
use std::sync::{Arc, RwLock};

/// Everything a finished training run produced.
#[derive(Debug)]
pub(crate) struct TrainingRun {
    /// City the run covered
    pub city: String,
    /// Snapshot date that was trained on
    pub snapshot_date: NaiveDate,
    /// URL the snapshot came from
    pub source_url: String,
    /// Listings that survived cleaning
    pub listings: usize,
    /// Evaluation metrics on the held-out split
    pub metrics: Metrics,
    /// Full feature-impact table, sorted by magnitude
    pub feature_impact: Vec<FeatureImpact>,
    /// Mean price per neighbourhood, sorted descending
    pub neighbourhood_prices: DataFrame,
}

impl TrainingRun {
    /// Console/JSON summary of this run.
    pub fn report(&self) -> TrainingReport {
        TrainingReport::new(
            self.city.clone(),
            self.snapshot_date,
            self.listings,
            self.metrics,
            &self.feature_impact,
        )
    }
}

/// Holds the most recent completed run for readers.
///
/// Writers replace the slot wholesale; readers get a cheap `Arc` clone.
#[derive(Debug, Default)]
pub(crate) struct ResultStore {
    latest: RwLock<Option<Arc<TrainingRun>>>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_latest(&self, run: Arc<TrainingRun>) {
        let mut slot = self
            .latest
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = Some(run);
    }

    pub fn get_latest(&self) -> Option<Arc<TrainingRun>> {
        self.latest
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}
