#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod registry;

// Re-export main types from sub-crates
pub use stayscout_data as data;
pub use stayscout_model as model;
pub use stayscout_output as output;
pub use stayscout_prep as prep;

pub use registry::{CITY_REGISTRY, CityRef, UnknownCityError, available_cities, resolve_city};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
