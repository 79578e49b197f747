//! Baseline price modeling for Stayscout.
//!
//! Takes a cleaned listings table and produces a fitted linear pipeline
//! (standardized numeric features, one-hot categoricals), evaluation metrics
//! on a held-out partition, and a signed feature-impact table. The split is
//! driven by a fixed seed, so identical input gives identical results.

#![forbid(unsafe_code)]

pub mod encode;
pub mod error;
pub mod impact;
pub mod metrics;
pub mod regress;
pub mod split;
pub mod train;

pub use encode::{CATEGORICAL_FEATURES, EncodingSchema, NUMERIC_FEATURES, TARGET, target_values};
pub use error::{ModelError, Result};
pub use impact::{FeatureImpact, feature_impacts};
pub use metrics::{Metrics, evaluate};
pub use regress::LinearRegressor;
pub use split::train_test_split;
pub use train::{PricePipeline, TrainConfig, TrainingOutcome, train_baseline};
