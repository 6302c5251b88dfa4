// exemplar-data/src/any_dataset_test.rs

use super::*;
use exemplar_core::utils::testing::labeled_examples;
use exemplar_core::{AutoVector, WeightLabel};

fn dense_dataset(labels: &[f64]) -> Dataset<DenseExample> {
    Dataset::from_examples(labeled_examples(labels)).unwrap()
}

fn auto_dataset(labels: &[f64]) -> Dataset<AutoExample> {
    Dataset::from_examples(labeled_examples(labels)).unwrap()
}

/// Reports which concrete dataset a `DatasetRef` resolved to.
struct KindName;

impl<'a> DatasetVisitor<'a> for KindName {
    type Output = &'static str;

    fn visit_dense(self, _dataset: &'a Dataset<DenseExample>) -> Self::Output {
        "dense"
    }

    fn visit_auto(self, _dataset: &'a Dataset<AutoExample>) -> Self::Output {
        "auto"
    }
}

#[test]
fn test_accept_resolves_concrete_type() {
    let dense = dense_dataset(&[1.0]);
    let auto = auto_dataset(&[1.0]);
    assert_eq!(DatasetRef::from(&dense).accept(KindName), "dense");
    assert_eq!(DatasetRef::from(&auto).accept(KindName), "auto");
}

#[test]
fn test_iter_over_dense_dataset_as_auto_examples() {
    let dense = dense_dataset(&[1.0, 2.0, 3.0, 4.0]);
    let view = AnyDataset::new(&dense, 1, 2);
    let examples: Vec<AutoExample> = view.iter().unwrap().collect();
    assert_eq!(examples.len(), 2);
    assert_eq!(examples[0].data_vector(), &AutoVector::from_values(vec![2.0]));
    assert_eq!(examples[1].metadata().label, 3.0);
}

#[test]
fn test_iter_over_auto_dataset_as_dense_examples() {
    let auto = auto_dataset(&[5.0, 6.0]);
    let view = AnyDataset::from(&auto);
    let examples: Vec<DenseExample> = view.iter().unwrap().collect();
    assert_eq!(examples, labeled_examples(&[5.0, 6.0]));
}

#[test]
fn test_same_view_code_for_both_types() {
    fn label_sum(view: AnyDataset<'_>) -> f64 {
        view.iter::<WeightLabel>().unwrap().map(|m| m.label).sum()
    }
    let dense = dense_dataset(&[1.0, 2.0, 3.0]);
    let auto = auto_dataset(&[1.0, 2.0, 3.0]);
    assert_eq!(label_sum(AnyDataset::new(&dense, 1, 0)), 5.0);
    assert_eq!(label_sum(AnyDataset::new(&auto, 1, 0)), 5.0);
}

#[test]
fn test_num_examples_normalizes_range() {
    let dense = dense_dataset(&[1.0, 2.0, 3.0]);
    assert_eq!(AnyDataset::new(&dense, 1, 0).num_examples().unwrap(), 2);
    assert_eq!(AnyDataset::new(&dense, 1, 10).num_examples().unwrap(), 2);
    assert_eq!(AnyDataset::new(&dense, 0, 1).num_examples().unwrap(), 1);
    assert!(AnyDataset::new(&dense, 4, 0).num_examples().is_err());
}

#[test]
fn test_view_past_end_fails_on_use() {
    let auto = auto_dataset(&[1.0]);
    let view = AnyDataset::new(&auto, 2, 1);
    assert_eq!(view.from_index(), 2);
    assert_eq!(view.size(), 1);
    assert!(matches!(
        view.iter::<DenseExample>(),
        Err(ExemplarError::RangeOutOfBounds { from_index: 2, len: 1 })
    ));
}

#[test]
fn test_dataset_ref_accessors() {
    let dense = dense_dataset(&[1.0, 2.0]);
    let view = AnyDataset::from(&dense);
    assert_eq!(view.dataset().num_examples(), 2);
    assert_eq!(view.dataset().max_example_size(), 1);
}

#[test]
fn test_view_print() {
    let auto = auto_dataset(&[0.0, 7.0]);
    let mut out = String::new();
    AnyDataset::new(&auto, 1, 1).print(&mut out, 1).unwrap();
    assert_eq!(out, " 7\t1\t7\n");
}

#[test]
fn test_view_print_matches_dataset_print_for_both_types() {
    let dense = dense_dataset(&[3.0, 4.0, 5.0]);
    let auto = auto_dataset(&[3.0, 4.0, 5.0]);
    for view in [AnyDataset::new(&dense, 1, 0), AnyDataset::new(&auto, 1, 0)] {
        let mut out = String::new();
        view.print(&mut out, 2).unwrap();
        assert_eq!(out, "  4\t1\t4\n  5\t1\t5\n");
    }

    let mut out = String::new();
    assert_eq!(
        AnyDataset::new(&dense, 4, 0).print(&mut out, 0).unwrap_err(),
        ExemplarError::RangeOutOfBounds { from_index: 4, len: 3 }
    );
    assert!(out.is_empty());
}
