//! Addressing for Inside Airbnb listing snapshots.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Base URL for Inside Airbnb data exports.
const DATA_BASE_URL: &str = "http://data.insideairbnb.com";

/// One dated city export on the Inside Airbnb host.
///
/// Country, region and city use the lowercase hyphenated form the host uses
/// in its paths (e.g. `united-states` / `nc` / `asheville`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotRef {
    /// Country path segment
    pub country: String,
    /// Region path segment
    pub region: String,
    /// City path segment
    pub city: String,
    /// Date the snapshot was scraped
    pub snapshot_date: NaiveDate,
}

impl SnapshotRef {
    /// URL of the gzipped detailed listings CSV for this snapshot.
    pub fn listings_url(&self) -> String {
        format!(
            "{}/{}/{}/{}/{}/data/listings.csv.gz",
            DATA_BASE_URL,
            self.country,
            self.region,
            self.city,
            self.snapshot_date.format("%Y-%m-%d")
        )
    }

    /// Where the listings file lives under a local cache root.
    pub fn cache_path(&self, root: &std::path::Path) -> PathBuf {
        root.join(format!("{}-{}-{}", self.city, self.region, self.country))
            .join(self.snapshot_date.format("%Y-%m-%d").to_string())
            .join("listings.csv.gz")
    }
}

impl std::fmt::Display for SnapshotRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.city, self.snapshot_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn asheville() -> SnapshotRef {
        SnapshotRef {
            country: "united-states".to_string(),
            region: "nc".to_string(),
            city: "asheville".to_string(),
            snapshot_date: NaiveDate::from_ymd_opt(2025, 6, 18).unwrap(),
        }
    }

    #[test]
    fn listings_url_matches_host_layout() {
        assert_eq!(
            asheville().listings_url(),
            "http://data.insideairbnb.com/united-states/nc/asheville/2025-06-18/data/listings.csv.gz"
        );
    }

    #[test]
    fn cache_path_separates_city_and_date() {
        let path = asheville().cache_path(Path::new("/tmp/stayscout"));
        assert_eq!(
            path,
            Path::new("/tmp/stayscout/asheville-nc-united-states/2025-06-18/listings.csv.gz")
        );
    }

    #[test]
    fn display_names_city_and_date() {
        assert_eq!(asheville().to_string(), "asheville (2025-06-18)");
    }
}
