use crate::vector::{AutoVector, DataVector, DenseVector};
use std::fmt;

/// A single stored row of a dataset.
///
/// Rows must be clonable (the identity projection hands out copies) and
/// printable (for dataset dumps).
pub trait Row: Clone + fmt::Display {
    /// Returns the length of the row's feature vector.
    fn feature_len(&self) -> usize;
}

/// Per-example metadata: an importance weight and a target label.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeightLabel {
    pub weight: f64,
    pub label: f64,
}

impl WeightLabel {
    pub fn new(weight: f64, label: f64) -> Self {
        WeightLabel { weight, label }
    }
}

impl fmt::Display for WeightLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.label, self.weight)
    }
}

/// A labeled data point: a feature vector plus metadata.
///
/// # Type Parameters
///
/// * `V`: The feature vector type.
/// * `M`: The metadata type, `WeightLabel` by default.
#[derive(Debug, Clone, PartialEq)]
pub struct Example<V, M = WeightLabel> {
    data_vector: V,
    metadata: M,
}

impl<V, M> Example<V, M> {
    pub fn new(data_vector: V, metadata: M) -> Self {
        Example {
            data_vector,
            metadata,
        }
    }

    pub fn data_vector(&self) -> &V {
        &self.data_vector
    }

    pub fn metadata(&self) -> &M {
        &self.metadata
    }

    pub fn metadata_mut(&mut self) -> &mut M {
        &mut self.metadata
    }

    /// Consumes the example, returning its feature vector and metadata.
    pub fn into_parts(self) -> (V, M) {
        (self.data_vector, self.metadata)
    }
}

impl<V: fmt::Display, M: fmt::Display> fmt::Display for Example<V, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.metadata, self.data_vector)
    }
}

impl<V, M> Row for Example<V, M>
where
    V: DataVector,
    M: Clone + fmt::Display,
{
    fn feature_len(&self) -> usize {
        self.data_vector.len()
    }
}

/// An example with a dense feature vector.
pub type DenseExample = Example<DenseVector, WeightLabel>;

/// An example whose feature vector picks its own layout.
pub type AutoExample = Example<AutoVector, WeightLabel>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_feature_len() {
        let example = DenseExample::new(DenseVector::new(vec![1.0, 2.0, 3.0]), WeightLabel::new(1.0, -1.0));
        assert_eq!(example.feature_len(), 3);
        assert_eq!(example.metadata().label, -1.0);
    }

    #[test]
    fn test_example_display() {
        let example = AutoExample::new(AutoVector::from_values(vec![2.0, 4.0]), WeightLabel::new(0.5, 1.0));
        assert_eq!(example.to_string(), "1\t0.5\t2 4");
    }

    #[test]
    fn test_example_metadata_mut() {
        let mut example = DenseExample::new(DenseVector::default(), WeightLabel::default());
        example.metadata_mut().weight = 2.0;
        let (vector, metadata) = example.into_parts();
        assert!(vector.is_empty());
        assert_eq!(metadata.weight, 2.0);
    }
}
