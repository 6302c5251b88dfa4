// exemplar-core/src/vector_test.rs

use super::*;
use approx::assert_relative_eq;

#[test]
fn test_dense_vector_len_and_get() {
    let vector = DenseVector::new(vec![1.0, 0.0, 3.0, 0.0]);
    assert_eq!(vector.len(), 4); // trailing zeros are kept
    assert_relative_eq!(vector.get(2), 3.0);
    assert_relative_eq!(vector.get(10), 0.0);
}

#[test]
fn test_dense_vector_display() {
    let vector: DenseVector = vec![1.0, 2.5, 3.0].into();
    assert_eq!(vector.to_string(), "1 2.5 3");
}

#[test]
fn test_auto_vector_stays_dense_when_full() {
    let vector = AutoVector::from_values(vec![1.0, 2.0, 0.0, 4.0]);
    assert!(vector.is_dense());
    assert_eq!(vector.len(), 4);
    assert_eq!(vector.num_nonzeros(), 3);
}

#[test]
fn test_auto_vector_goes_sparse_when_mostly_zero() {
    let vector = AutoVector::from_values(vec![0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 5.0]);
    assert!(!vector.is_dense());
    assert_eq!(vector.len(), 8);
    assert_eq!(vector.num_nonzeros(), 2);
    assert_eq!(vector.to_string(), "3:2 7:5");
    let nonzeros: Vec<(usize, f64)> = vector.iter_nonzeros().collect();
    assert_eq!(nonzeros, vec![(3, 2.0), (7, 5.0)]);
}

#[test]
fn test_auto_vector_drops_trailing_zeros() {
    let vector = AutoVector::from_values(vec![1.0, 2.0, 0.0, 0.0]);
    assert_eq!(vector.len(), 2);

    let empty = AutoVector::from_values(vec![0.0, 0.0]);
    assert_eq!(empty.len(), 0);
    assert!(empty.is_empty());
    assert!(empty.is_dense());
}

#[test]
fn test_auto_to_dense_conversion() {
    let auto = AutoVector::from_values(vec![0.0, 0.0, 0.0, 0.0, 0.0, 1.5]);
    let dense = DenseVector::from(&auto);
    assert_eq!(dense.values(), &[0.0, 0.0, 0.0, 0.0, 0.0, 1.5]);

    let back = AutoVector::from(&dense);
    assert_eq!(back, auto);
}
