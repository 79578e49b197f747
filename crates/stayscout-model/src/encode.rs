//! Column-wise preprocessing: standardization and one-hot encoding.
//!
//! The fitted state is an explicit [`EncodingSchema`] artifact rather than
//! an implicit property of a pipeline object, so the exact training-time
//! transformation can be serialized and re-applied later without re-fitting.

use crate::error::{ModelError, Result};
use ndarray::{Array1, Array2};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Numeric feature columns, standardized before the fit.
pub const NUMERIC_FEATURES: [&str; 5] = [
    "bedrooms",
    "bathrooms",
    "accommodates",
    "amenities_count",
    "review_scores_rating",
];

/// Categorical feature columns, one-hot expanded before the fit.
pub const CATEGORICAL_FEATURES: [&str; 3] =
    ["room_type", "property_type_grouped", "neighbourhood_cleansed"];

/// Prediction target.
pub const TARGET: &str = "price";

/// Standardization parameters for one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericScaler {
    /// Column name.
    pub name: String,
    /// Training-partition mean.
    pub mean: f64,
    /// Training-partition standard deviation (population).
    pub std: f64,
}

/// Observed levels for one categorical column, in indicator order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalLevels {
    /// Column name.
    pub name: String,
    /// Levels observed in the training partition, sorted.
    pub levels: Vec<String>,
}

/// Captured preprocessing artifact, fit on the training partition only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodingSchema {
    /// Scalers for the numeric features.
    pub numeric: Vec<NumericScaler>,
    /// Level vocabularies for the categorical features.
    pub categorical: Vec<CategoricalLevels>,
}

impl EncodingSchema {
    /// Fit scalers and level vocabularies on the training partition.
    pub fn fit(train: &DataFrame) -> Result<Self> {
        let mut numeric = Vec::with_capacity(NUMERIC_FEATURES.len());
        for name in NUMERIC_FEATURES {
            let values = numeric_values(train, name)?;
            let n = values.len() as f64;
            let mean = values.iter().sum::<f64>() / n;
            let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
            numeric.push(NumericScaler {
                name: name.to_string(),
                mean,
                std: variance.sqrt(),
            });
        }

        let mut categorical = Vec::with_capacity(CATEGORICAL_FEATURES.len());
        for name in CATEGORICAL_FEATURES {
            let values = train.column(name)?.str()?;
            let observed: BTreeSet<&str> = values.into_iter().flatten().collect();
            categorical.push(CategoricalLevels {
                name: name.to_string(),
                levels: observed.into_iter().map(str::to_string).collect(),
            });
        }

        Ok(Self {
            numeric,
            categorical,
        })
    }

    /// Names of the transformed feature columns, in matrix order.
    ///
    /// Numeric columns keep their name; each one-hot level becomes
    /// `column=level`.
    pub fn feature_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.numeric.iter().map(|s| s.name.clone()).collect();
        for cat in &self.categorical {
            for level in &cat.levels {
                names.push(format!("{}={}", cat.name, level));
            }
        }
        names
    }

    /// Width of the transformed feature matrix.
    pub fn width(&self) -> usize {
        self.numeric.len() + self.categorical.iter().map(|c| c.levels.len()).sum::<usize>()
    }

    /// Apply the captured transformation to a table.
    ///
    /// Numeric columns are standardized with the training statistics (a
    /// zero-variance column maps to 0.0). Categorical values outside the
    /// training vocabulary leave their indicator block all zero; they are
    /// never an error.
    pub fn transform(&self, df: &DataFrame) -> Result<Array2<f64>> {
        let rows = df.height();
        let mut matrix = Array2::<f64>::zeros((rows, self.width()));

        let mut offset = 0;
        for scaler in &self.numeric {
            let values = numeric_values(df, &scaler.name)?;
            for (i, v) in values.iter().enumerate() {
                matrix[[i, offset]] = if scaler.std > 0.0 {
                    (v - scaler.mean) / scaler.std
                } else {
                    0.0
                };
            }
            offset += 1;
        }

        for cat in &self.categorical {
            let values = df.column(&cat.name)?.str()?;
            for (i, value) in values.into_iter().enumerate() {
                if let Some(value) = value {
                    if let Ok(j) = cat.levels.binary_search_by(|l| l.as_str().cmp(value)) {
                        matrix[[i, offset + j]] = 1.0;
                    }
                }
            }
            offset += cat.levels.len();
        }

        Ok(matrix)
    }
}

/// Extract the target column as a dense vector.
pub fn target_values(df: &DataFrame) -> Result<Array1<f64>> {
    numeric_values(df, TARGET).map(Array1::from_vec)
}

/// Read a column as non-null `f64` values, casting integer columns.
fn numeric_values(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let column = df
        .column(name)
        .map_err(|_| ModelError::MissingColumn(name.to_string()))?
        .cast(&DataType::Float64)?;
    let values = column.f64()?;
    let mut out = Vec::with_capacity(values.len());
    for v in values {
        out.push(v.ok_or_else(|| ModelError::MissingValue {
            column: name.to_string(),
        })?);
    }
    Ok(out)
}
