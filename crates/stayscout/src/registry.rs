//! Registry of supported cities.
//!
//! Inside Airbnb addresses exports by country/region/city path segments;
//! the registry maps the short city names users type to those segments.

use chrono::NaiveDate;
use stayscout_data::SnapshotRef;
use thiserror::Error;

/// A supported city and its Inside Airbnb path segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CityRef {
    /// Country path segment
    pub country: &'static str,
    /// Region path segment
    pub region: &'static str,
    /// City path segment
    pub city: &'static str,
}

impl CityRef {
    /// Reference to this city's export for a given scrape date.
    pub fn snapshot(&self, snapshot_date: NaiveDate) -> SnapshotRef {
        SnapshotRef {
            country: self.country.to_string(),
            region: self.region.to_string(),
            city: self.city.to_string(),
            snapshot_date,
        }
    }
}

/// Cities with known Inside Airbnb exports.
pub const CITY_REGISTRY: &[CityRef] = &[
    CityRef {
        country: "united-states",
        region: "nc",
        city: "asheville",
    },
    CityRef {
        country: "united-states",
        region: "nc",
        city: "boone",
    },
    CityRef {
        country: "united-states",
        region: "nc",
        city: "wilmington",
    },
];

/// Error for a city name the registry does not know.
#[derive(Debug, Error)]
#[error("unknown city '{query}', available: {}", available.join(", "))]
pub struct UnknownCityError {
    /// The name that was looked up
    pub query: String,
    /// Registered city names
    pub available: Vec<String>,
}

/// Look up a city by name, ignoring case and surrounding whitespace.
pub fn resolve_city(query: &str) -> Result<CityRef, UnknownCityError> {
    let needle = query.trim().to_lowercase();
    CITY_REGISTRY
        .iter()
        .find(|c| c.city == needle)
        .copied()
        .ok_or_else(|| UnknownCityError {
            query: query.to_string(),
            available: available_cities(),
        })
}

/// Names of all registered cities.
pub fn available_cities() -> Vec<String> {
    CITY_REGISTRY.iter().map(|c| c.city.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_city() {
        let city = resolve_city("asheville").unwrap();
        assert_eq!(city.country, "united-states");
        assert_eq!(city.region, "nc");
    }

    #[test]
    fn lookup_ignores_case_and_whitespace() {
        assert_eq!(
            resolve_city("  Asheville ").unwrap(),
            resolve_city("asheville").unwrap()
        );
    }

    #[test]
    fn unknown_city_lists_alternatives() {
        let err = resolve_city("gotham").unwrap_err();
        assert_eq!(err.query, "gotham");
        assert!(err.available.contains(&"asheville".to_string()));
        assert!(err.to_string().contains("boone"));
    }

    #[test]
    fn snapshot_carries_segments_and_date() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 18).unwrap();
        let snapshot = resolve_city("boone").unwrap().snapshot(date);
        assert_eq!(snapshot.city, "boone");
        assert_eq!(snapshot.snapshot_date, date);
        assert!(snapshot.listings_url().contains("/united-states/nc/boone/"));
    }
}
