//! HTTP download and CSV loading for listing snapshots.

use crate::error::{DataError, Result};
use crate::snapshot::SnapshotRef;
use polars::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Request timeout for snapshot downloads.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// User agent sent with download requests.
const USER_AGENT: &str = "Stayscout/0.1 (listings research)";

/// A snapshot that has been fetched to disk and loaded into a frame.
#[derive(Debug)]
pub struct ListingsSnapshot {
    /// Snapshot this data came from
    pub reference: SnapshotRef,
    /// URL the file was (or would be) downloaded from
    pub url: String,
    /// Local path of the cached file
    pub path: PathBuf,
    /// Raw listings table, all columns as exported
    pub listings: DataFrame,
}

/// Client that downloads listing snapshots and caches them on disk.
///
/// Downloads are skipped when the file is already cached; pass
/// `force_refresh` to re-download anyway.
#[derive(Debug, Clone)]
pub struct ListingsClient {
    http: reqwest::Client,
    cache_root: PathBuf,
}

impl ListingsClient {
    /// Create a client caching under `cache_root`.
    pub fn new(cache_root: PathBuf) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(DataError::Network)?;
        Ok(Self { http, cache_root })
    }

    /// Cache directory this client writes into.
    pub fn cache_root(&self) -> &Path {
        &self.cache_root
    }

    /// Fetch a snapshot, using the disk cache when possible.
    pub async fn fetch_listings(&self, reference: &SnapshotRef) -> Result<ListingsSnapshot> {
        self.fetch_listings_with(reference, false).await
    }

    /// Fetch a snapshot, optionally bypassing the disk cache.
    pub async fn fetch_listings_with(
        &self,
        reference: &SnapshotRef,
        force_refresh: bool,
    ) -> Result<ListingsSnapshot> {
        let url = reference.listings_url();
        let path = reference.cache_path(&self.cache_root);

        if force_refresh || !path.exists() {
            self.download(&url, &path).await?;
        } else {
            tracing::debug!(path = %path.display(), "using cached snapshot");
        }

        let listings = load_listings(&path)?;
        tracing::info!(
            snapshot = %reference,
            rows = listings.height(),
            "loaded listings snapshot"
        );

        Ok(ListingsSnapshot {
            reference: reference.clone(),
            url,
            path,
            listings,
        })
    }

    async fn download(&self, url: &str, path: &Path) -> Result<()> {
        tracing::info!(%url, "downloading snapshot");

        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(DataError::Http {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }
        let bytes = response.bytes().await?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &bytes)?;

        tracing::debug!(path = %path.display(), bytes = bytes.len(), "snapshot cached");
        Ok(())
    }
}

/// Load a listings CSV (plain or gzipped) into a frame.
///
/// Schema inference scans the whole file; listing exports mix sparse text
/// and numeric columns, and a short inference window misreads them.
pub fn load_listings(path: &Path) -> Result<DataFrame> {
    let frame = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;
    Ok(frame)
}
