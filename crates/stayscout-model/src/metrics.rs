//! Evaluation metrics for the baseline model.

use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Evaluation metrics from one training run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Root mean squared error on the evaluation partition.
    #[serde(rename = "RMSE")]
    pub rmse: f64,
    /// Coefficient of determination on the evaluation partition.
    #[serde(rename = "R2")]
    pub r2: f64,
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RMSE: {:.2}, R2: {:.4}", self.rmse, self.r2)
    }
}

/// Compute RMSE and R² of predictions against actual values.
///
/// A zero-variance evaluation target leaves R² undefined; 0.0 is reported
/// by convention instead of failing.
pub fn evaluate(actual: &Array1<f64>, predicted: &Array1<f64>) -> Metrics {
    if actual.is_empty() {
        return Metrics { rmse: 0.0, r2: 0.0 };
    }

    let n = actual.len() as f64;
    let ss_res: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum();
    let rmse = (ss_res / n).sqrt();

    let mean = actual.sum() / n;
    let ss_tot: f64 = actual.iter().map(|a| (a - mean).powi(2)).sum();
    let r2 = if ss_tot > 0.0 {
        1.0 - ss_res / ss_tot
    } else {
        0.0
    };

    Metrics { rmse, r2 }
}
