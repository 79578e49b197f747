//! Cleaning stage for Stayscout.
//!
//! Turns a raw Inside Airbnb listings snapshot into a typed, null-free,
//! feature-ready table: currency strings become floats, free-text bathroom
//! descriptions become counts, amenity lists become sizes, rare property
//! types collapse into `"Other"`, and outlier rows are dropped.

#![forbid(unsafe_code)]

pub mod clean;
pub mod error;
pub mod parse;

pub use clean::{CleanConfig, OUTPUT_COLUMNS, REQUIRED_COLUMNS, clean_listings};
pub use error::{PrepError, Result};
pub use parse::{count_amenities, parse_bathrooms, parse_price};
