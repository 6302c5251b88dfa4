//! Conversions between row types.
//!
//! Iterating a dataset can hand out rows of a different type than the one
//! stored, and building a dataset converts each incoming row to the stored
//! type. Both go through the traits here, so every supported pair of types is
//! known at compile time.

use crate::error::ExemplarError;
use crate::example::{AutoExample, DenseExample, WeightLabel};
use crate::vector::{AutoVector, DenseVector};

/// Infallible projection of a stored row `S` into `Self`.
///
/// Every `T: Clone` projects into itself by cloning.
pub trait FromExample<S>: Sized {
    fn from_example(source: &S) -> Self;
}

/// Fallible conversion of an incoming row `S` into `Self`, used when a
/// dataset is built from a sequence of rows.
///
/// Implemented for every `T: FromExample<S>`. Implement it directly for
/// conversions that can fail.
pub trait TryFromExample<S>: Sized {
    fn try_from_example(source: S) -> Result<Self, ExemplarError>;
}

impl<T: Clone> FromExample<T> for T {
    fn from_example(source: &T) -> Self {
        source.clone()
    }
}

impl<S, T> TryFromExample<S> for T
where
    T: FromExample<S>,
{
    fn try_from_example(source: S) -> Result<Self, ExemplarError> {
        Ok(T::from_example(&source))
    }
}

impl FromExample<DenseExample> for AutoExample {
    fn from_example(source: &DenseExample) -> Self {
        AutoExample::new(AutoVector::from(source.data_vector()), *source.metadata())
    }
}

impl FromExample<AutoExample> for DenseExample {
    fn from_example(source: &AutoExample) -> Self {
        DenseExample::new(DenseVector::from(source.data_vector()), *source.metadata())
    }
}

impl FromExample<DenseExample> for WeightLabel {
    fn from_example(source: &DenseExample) -> Self {
        *source.metadata()
    }
}

impl FromExample<AutoExample> for WeightLabel {
    fn from_example(source: &AutoExample) -> Self {
        *source.metadata()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_projection_clones() {
        let example = DenseExample::new(DenseVector::new(vec![1.0, 2.0]), WeightLabel::new(1.0, 1.0));
        let projected = DenseExample::from_example(&example);
        assert_eq!(projected, example);
    }

    #[test]
    fn test_dense_to_auto_keeps_metadata() {
        let example = DenseExample::new(DenseVector::new(vec![0.0, 0.0, 0.0, 3.0]), WeightLabel::new(2.0, -1.0));
        let auto = AutoExample::from_example(&example);
        assert_eq!(auto.metadata(), example.metadata());
        assert_eq!(auto.data_vector().to_string(), "3:3");
    }

    #[test]
    fn test_try_from_example_bridges_infallible_projection() {
        let example = AutoExample::new(AutoVector::from_values(vec![1.0]), WeightLabel::new(1.0, 0.0));
        let dense: DenseExample = TryFromExample::try_from_example(example).unwrap();
        assert_eq!(dense.data_vector().values(), &[1.0]);
    }

    #[test]
    fn test_project_to_metadata() {
        let example = DenseExample::new(DenseVector::new(vec![1.0]), WeightLabel::new(0.25, 4.0));
        assert_eq!(WeightLabel::from_example(&example), WeightLabel::new(0.25, 4.0));
    }
}
