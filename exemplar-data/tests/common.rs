use exemplar_core::utils::testing::labeled_examples;
use exemplar_core::DenseExample;
use exemplar_data::Dataset;

// Helpers shared by the integration tests. Each test file compiles this module
// separately, hence the allow(dead_code).

/// Installs `env_logger` for the test binary. Safe to call from every test.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Dense dataset whose i-th row has label (and single feature) `labels[i]`.
#[allow(dead_code)]
pub fn dense_dataset(labels: &[f64]) -> Dataset<DenseExample> {
    Dataset::from_examples(labeled_examples(labels)).expect("Test dataset creation failed")
}

/// Labels of every row, in row order.
#[allow(dead_code)]
pub fn labels_of(dataset: &Dataset<DenseExample>) -> Vec<f64> {
    dataset.into_iter().map(|e| e.metadata().label).collect()
}

/// Sorted copy of `labels`.
#[allow(dead_code)]
pub fn sorted(labels: &[f64]) -> Vec<f64> {
    let mut labels = labels.to_vec();
    labels.sort_by(f64::total_cmp);
    labels
}
