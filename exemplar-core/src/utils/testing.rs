//! Synthetic example generators shared by the test suites and demos.

use crate::error::ExemplarError;
use crate::example::{DenseExample, WeightLabel};
use crate::vector::DenseVector;
use log::debug;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Creates `num_examples` dense examples with `num_features` standard-normal
/// features each.
///
/// The label is `1.0` when the first feature is non-negative and `-1.0`
/// otherwise; every weight is `1.0`.
///
/// # Errors
///
/// Returns `ExemplarError::InvalidArgument` if `num_features` is zero.
pub fn random_dense_examples<R: Rng + ?Sized>(
    rng: &mut R,
    num_examples: usize,
    num_features: usize,
) -> Result<Vec<DenseExample>, ExemplarError> {
    if num_features == 0 {
        return Err(ExemplarError::InvalidArgument(
            "random_dense_examples needs at least one feature".to_string(),
        ));
    }
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| ExemplarError::InvalidArgument(format!("normal distribution: {}", e)))?;

    let examples = (0..num_examples)
        .map(|_| {
            let values: Vec<f64> = (0..num_features).map(|_| normal.sample(&mut *rng)).collect();
            let label = if values[0] >= 0.0 { 1.0 } else { -1.0 };
            DenseExample::new(DenseVector::new(values), WeightLabel::new(1.0, label))
        })
        .collect();
    debug!(
        "random_dense_examples: generated {} examples with {} features",
        num_examples, num_features
    );
    Ok(examples)
}

/// Creates one dense example per label, with the label repeated as its single
/// feature. Handy for tests that sort or partition by label.
pub fn labeled_examples(labels: &[f64]) -> Vec<DenseExample> {
    labels
        .iter()
        .map(|&label| DenseExample::new(DenseVector::new(vec![label]), WeightLabel::new(1.0, label)))
        .collect()
}
