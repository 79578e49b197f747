//! Orchestration of the fetch-clean-train pipeline.

use crate::store::{ResultStore, TrainingRun};
use chrono::NaiveDate;
use stayscout::registry::{UnknownCityError, resolve_city};
use stayscout_data::{DataError, ListingsClient};
use stayscout_model::{ModelError, TrainConfig, train_baseline};
use stayscout_output::average_price_by_neighbourhood;
use stayscout_prep::{CleanConfig, PrepError, clean_listings};
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced by the analytics service.
#[derive(Debug, Error)]
pub(crate) enum ServiceError {
    /// City not in the registry
    #[error(transparent)]
    UnknownCity(#[from] UnknownCityError),

    /// Snapshot download or load failure
    #[error("data error: {0}")]
    Data(#[from] DataError),

    /// Cleaning failure
    #[error("cleaning error: {0}")]
    Prep(#[from] PrepError),

    /// Training failure
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    /// Aggregation failure
    #[error("aggregation error: {0}")]
    Output(#[from] polars::prelude::PolarsError),
}

/// Runs training end to end and publishes results to a shared store.
pub(crate) struct AnalyticsService {
    client: ListingsClient,
    store: ResultStore,
}

impl AnalyticsService {
    pub fn new(client: ListingsClient) -> Self {
        Self {
            client,
            store: ResultStore::new(),
        }
    }

    /// Most recently completed run, if any.
    pub fn latest(&self) -> Option<Arc<TrainingRun>> {
        self.store.get_latest()
    }

    /// Fetch a city snapshot, clean it, train the baseline model, and
    /// publish the finished run.
    pub async fn train_snapshot(
        &self,
        city_query: &str,
        snapshot_date: NaiveDate,
        clean_config: &CleanConfig,
        train_config: &TrainConfig,
        force_refresh: bool,
    ) -> Result<Arc<TrainingRun>, ServiceError> {
        let city = resolve_city(city_query)?;
        let reference = city.snapshot(snapshot_date);

        let snapshot = self
            .client
            .fetch_listings_with(&reference, force_refresh)
            .await?;
        tracing::info!(
            snapshot = %snapshot.reference,
            raw_rows = snapshot.listings.height(),
            "snapshot ready"
        );

        let clean = clean_listings(&snapshot.listings, clean_config)?;
        tracing::info!(
            clean_rows = clean.height(),
            dropped = snapshot.listings.height() - clean.height(),
            "cleaned listings"
        );

        let outcome = train_baseline(&clean, train_config)?;
        tracing::info!(
            rmse = outcome.metrics.rmse,
            r2 = outcome.metrics.r2,
            "model trained"
        );

        let neighbourhood_prices = average_price_by_neighbourhood(&clean)?;

        let run = Arc::new(TrainingRun {
            city: city.city.to_string(),
            snapshot_date,
            source_url: snapshot.url,
            listings: clean.height(),
            metrics: outcome.metrics,
            feature_impact: outcome.feature_impact,
            neighbourhood_prices,
        });
        self.store.set_latest(Arc::clone(&run));
        Ok(run)
    }
}
