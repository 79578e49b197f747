//! Ordinary least squares on dense feature matrices.
//!
//! The solver works through an eigendecomposition of the centered Gram
//! matrix and discards near-null directions, which gives the minimum-norm
//! solution. That matters here: the one-hot expansion keeps every observed
//! level, so the feature matrix is rank-deficient whenever an intercept-like
//! combination exists, and plain Gaussian elimination would fail.

use crate::error::{ModelError, Result};
use ndarray::{Array1, Array2, Axis};

/// Relative eigenvalue cutoff below which a direction counts as null space.
const EIGEN_RTOL: f64 = 1e-10;
/// Maximum Jacobi sweeps; small symmetric systems converge in a handful.
const JACOBI_SWEEPS: usize = 100;
/// Convergence tolerance on off-diagonal mass.
const JACOBI_TOL: f64 = 1e-12;

/// Fitted linear regressor: `y = X · coefficients + intercept`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegressor {
    coefficients: Array1<f64>,
    intercept: f64,
}

impl LinearRegressor {
    /// Fit by minimum-norm least squares.
    ///
    /// Features and target are centered, the normal equations are solved via
    /// the Gram matrix eigendecomposition, and the intercept is recovered
    /// from the column means.
    pub fn fit(x: &Array2<f64>, y: &Array1<f64>) -> Result<Self> {
        let (rows, cols) = x.dim();
        if rows != y.len() {
            return Err(ModelError::ShapeMismatch {
                rows,
                targets: y.len(),
            });
        }
        if rows == 0 {
            return Err(ModelError::TooFewRows { rows: 0, min: 1 });
        }

        let x_means = x.sum_axis(Axis(0)) / rows as f64;
        let y_mean = y.sum() / rows as f64;
        let xc = x - &x_means;
        let yc = y - y_mean;

        let gram = xc.t().dot(&xc);
        let rhs = xc.t().dot(&yc);

        let (eigenvalues, eigenvectors) = symmetric_eigen(&gram);
        let largest = eigenvalues.iter().fold(0.0f64, |m, v| m.max(v.abs()));
        let cutoff = largest * EIGEN_RTOL;

        let mut coefficients = Array1::<f64>::zeros(cols);
        for k in 0..cols {
            let lambda = eigenvalues[k];
            if lambda <= cutoff {
                continue;
            }
            let direction = eigenvectors.column(k);
            let scale = direction.dot(&rhs) / lambda;
            coefficients.scaled_add(scale, &direction);
        }

        let intercept = y_mean - coefficients.dot(&x_means);
        Ok(Self {
            coefficients,
            intercept,
        })
    }

    /// Predict targets for a transformed feature matrix.
    pub fn predict(&self, x: &Array2<f64>) -> Array1<f64> {
        x.dot(&self.coefficients) + self.intercept
    }

    /// Fitted weights, one per transformed feature column.
    pub fn coefficients(&self) -> &Array1<f64> {
        &self.coefficients
    }

    /// Fitted intercept.
    pub const fn intercept(&self) -> f64 {
        self.intercept
    }
}

/// Cyclic Jacobi eigendecomposition of a symmetric matrix.
///
/// Returns eigenvalues and matching eigenvector columns, unsorted. At the
/// feature counts seen here (tens of columns) this converges in a few
/// sweeps and avoids an external solver dependency.
fn symmetric_eigen(matrix: &Array2<f64>) -> (Array1<f64>, Array2<f64>) {
    let n = matrix.nrows();
    let mut a = matrix.clone();
    let mut v = Array2::<f64>::eye(n);

    for _ in 0..JACOBI_SWEEPS {
        let mut off_diagonal = 0.0;
        for i in 0..n {
            for j in (i + 1)..n {
                off_diagonal += a[[i, j]] * a[[i, j]];
            }
        }
        if off_diagonal.sqrt() < JACOBI_TOL {
            break;
        }

        for p in 0..n {
            for q in (p + 1)..n {
                let apq = a[[p, q]];
                if apq.abs() < JACOBI_TOL {
                    continue;
                }

                let tau = (a[[q, q]] - a[[p, p]]) / (2.0 * apq);
                let t = if tau >= 0.0 {
                    1.0 / (tau + (1.0 + tau * tau).sqrt())
                } else {
                    -1.0 / (-tau + (1.0 + tau * tau).sqrt())
                };
                let c = 1.0 / (1.0 + t * t).sqrt();
                let s = t * c;

                let app = a[[p, p]];
                let aqq = a[[q, q]];
                for i in 0..n {
                    if i != p && i != q {
                        let aip = a[[i, p]];
                        let aiq = a[[i, q]];
                        a[[i, p]] = c * aip - s * aiq;
                        a[[p, i]] = a[[i, p]];
                        a[[i, q]] = s * aip + c * aiq;
                        a[[q, i]] = a[[i, q]];
                    }
                }
                a[[p, p]] = c * c * app - 2.0 * c * s * apq + s * s * aqq;
                a[[q, q]] = s * s * app + 2.0 * c * s * apq + c * c * aqq;
                a[[p, q]] = 0.0;
                a[[q, p]] = 0.0;

                for i in 0..n {
                    let vip = v[[i, p]];
                    let viq = v[[i, q]];
                    v[[i, p]] = c * vip - s * viq;
                    v[[i, q]] = s * vip + c * viq;
                }
            }
        }
    }

    let eigenvalues = Array1::from_iter((0..n).map(|i| a[[i, i]]));
    (eigenvalues, v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn recovers_exact_linear_relationship() {
        // y = 2*x0 - 3*x1 + 5
        let x = array![
            [1.0, 0.0],
            [0.0, 1.0],
            [1.0, 1.0],
            [2.0, 1.0],
            [3.0, -1.0],
        ];
        let y = array![7.0, 2.0, 4.0, 6.0, 14.0];

        let model = LinearRegressor::fit(&x, &y).unwrap();
        assert_abs_diff_eq!(model.coefficients()[0], 2.0, epsilon = 1e-8);
        assert_abs_diff_eq!(model.coefficients()[1], -3.0, epsilon = 1e-8);
        assert_abs_diff_eq!(model.intercept(), 5.0, epsilon = 1e-8);

        let predicted = model.predict(&x);
        for (p, a) in predicted.iter().zip(y.iter()) {
            assert_abs_diff_eq!(p, a, epsilon = 1e-8);
        }
    }

    #[test]
    fn collinear_columns_do_not_fail() {
        // Second column duplicates the first; the Gram matrix is singular.
        let x = array![[1.0, 1.0], [2.0, 2.0], [3.0, 3.0], [4.0, 4.0]];
        let y = array![2.0, 4.0, 6.0, 8.0];

        let model = LinearRegressor::fit(&x, &y).unwrap();
        let predicted = model.predict(&x);
        for (p, a) in predicted.iter().zip(y.iter()) {
            assert_abs_diff_eq!(p, a, epsilon = 1e-8);
        }
        // Minimum-norm solution spreads the weight evenly.
        assert_abs_diff_eq!(
            model.coefficients()[0],
            model.coefficients()[1],
            epsilon = 1e-8
        );
    }

    #[test]
    fn constant_features_fall_back_to_mean() {
        let x = array![[1.0], [1.0], [1.0]];
        let y = array![10.0, 20.0, 30.0];

        let model = LinearRegressor::fit(&x, &y).unwrap();
        assert_abs_diff_eq!(model.coefficients()[0], 0.0);
        assert_abs_diff_eq!(model.intercept(), 20.0);
    }

    #[test]
    fn shape_mismatch_is_an_error() {
        let x = array![[1.0], [2.0]];
        let y = array![1.0, 2.0, 3.0];
        let err = LinearRegressor::fit(&x, &y).unwrap_err();
        assert!(matches!(err, ModelError::ShapeMismatch { rows: 2, targets: 3 }));
    }

    #[test]
    fn symmetric_eigen_reconstructs_diagonal() {
        let m = array![[4.0, 0.0], [0.0, 9.0]];
        let (values, _) = symmetric_eigen(&m);
        let mut sorted: Vec<f64> = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_abs_diff_eq!(sorted[0], 4.0, epsilon = 1e-10);
        assert_abs_diff_eq!(sorted[1], 9.0, epsilon = 1e-10);
    }
}
