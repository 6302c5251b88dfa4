//! Shuffles a synthetic dataset, splits it into minibatches through a
//! type-erased view, and prints the first batch.

use exemplar_core::utils::testing::random_dense_examples;
use exemplar_core::{AutoExample, DenseExample, WeightLabel};
use exemplar_data::{AnyDataset, BatchConfig, Dataset};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    let mut rng = StdRng::seed_from_u64(42);

    // 10 examples with 3 normally distributed features each
    let examples = random_dense_examples(&mut rng, 10, 3).expect("Synthetic examples");
    let mut dataset: Dataset<DenseExample> = Dataset::from_examples(examples).expect("Dense dataset");
    println!("Dataset: {} examples, max size {}", dataset.num_examples(), dataset.max_example_size());

    // Sample 4 examples uniformly into the front, then put positives first among them
    dataset.random_permute(&mut rng, 4).expect("Permute");
    let boundary = dataset
        .partition(|e| e.metadata().label > 0.0, 0, 4)
        .expect("Partition");
    println!("Positive examples in the sampled prefix: {}", boundary);

    println!("\n--- Batches of 4 ---");
    let view = AnyDataset::from(&dataset);
    for (i, batch) in view.batches(BatchConfig::new(4)).expect("Batches").enumerate() {
        let labels: Vec<f64> = batch
            .iter::<WeightLabel>()
            .expect("Batch in range")
            .map(|m| m.label)
            .collect();
        println!("Batch {i}: labels {:?}", labels);
    }

    // The same view code works over a dataset with a different row type
    let autos: Dataset<AutoExample> = Dataset::from_examples(view.iter::<AutoExample>().expect("Iterator"))
        .expect("Auto dataset");
    println!("\n--- First batch, auto layout ---");
    let mut out = String::new();
    AnyDataset::new(&autos, 0, 4).print(&mut out, 2).expect("Print");
    print!("{}", out);
}
