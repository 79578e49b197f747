//! Reproducible train/test partitioning.

use crate::error::{ModelError, Result};
use polars::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Split a table into training and evaluation partitions.
///
/// Rows are shuffled with a seeded RNG and the first
/// `ceil(n * test_fraction)` land in the evaluation partition (clamped so
/// neither side is empty). The same input and seed always produce the same
/// split.
pub fn train_test_split(
    df: &DataFrame,
    test_fraction: f64,
    seed: u64,
) -> Result<(DataFrame, DataFrame)> {
    let n = df.height();
    if n < 2 {
        return Err(ModelError::TooFewRows { rows: n, min: 2 });
    }

    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let n_test = ((n as f64) * test_fraction).ceil() as usize;
    let n_test = n_test.clamp(1, n - 1);

    let test = df.take(&to_idx_ca(&indices[..n_test]))?;
    let train = df.take(&to_idx_ca(&indices[n_test..]))?;
    Ok((train, test))
}

fn to_idx_ca(indices: &[usize]) -> IdxCa {
    IdxCa::from_vec(
        "idx".into(),
        indices.iter().map(|&i| i as IdxSize).collect(),
    )
}
