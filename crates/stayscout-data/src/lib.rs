//! Snapshot access for Stayscout.
//!
//! Inside Airbnb publishes per-city listing exports as dated, gzipped CSV
//! files. This crate addresses those snapshots, downloads them into a local
//! disk cache, and loads them into polars frames for the rest of the
//! pipeline.

#![forbid(unsafe_code)]

pub mod client;
pub mod error;
pub mod snapshot;

pub use client::{ListingsClient, ListingsSnapshot, load_listings};
pub use error::{DataError, Result};
pub use snapshot::SnapshotRef;
