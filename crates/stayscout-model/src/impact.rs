//! Signed feature-impact table derived from the fitted linear model.

use crate::encode::EncodingSchema;
use crate::regress::LinearRegressor;
use serde::{Deserialize, Serialize};

/// One transformed feature and its fitted weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureImpact {
    /// Transformed feature name (numeric column, or `column=level`).
    pub feature: String,
    /// Signed linear-model weight after scaling/encoding.
    pub coefficient: f64,
    /// Magnitude of the weight, used only for ordering.
    pub abs_coeff: f64,
}

/// Build the feature-impact table, sorted by magnitude descending.
///
/// The sort is stable, so ties keep schema order and repeated runs produce
/// identical tables.
pub fn feature_impacts(schema: &EncodingSchema, regressor: &LinearRegressor) -> Vec<FeatureImpact> {
    let mut impacts: Vec<FeatureImpact> = schema
        .feature_names()
        .into_iter()
        .zip(regressor.coefficients().iter())
        .map(|(feature, &coefficient)| FeatureImpact {
            feature,
            coefficient,
            abs_coeff: coefficient.abs(),
        })
        .collect();

    impacts.sort_by(|a, b| {
        b.abs_coeff
            .partial_cmp(&a.abs_coeff)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    impacts
}
