//! In-memory example store.
//!
//! A [`Dataset`] owns an ordered collection of rows of one type. It can be
//! sorted, partitioned and randomly permuted over row ranges, and read back
//! through lazy [`ExampleIterator`]s that project rows into another example
//! type on the fly. [`AnyDataset`] hides which concrete row type a dataset
//! stores, and [`Batches`] splits a dataset into minibatch views.

pub mod any_dataset;
pub mod batches;
pub mod dataset;
pub mod iterator;
pub mod range;

// Re-export main components
pub use any_dataset::{AnyDataset, AnyExample, DatasetRef, DatasetVisitor, GetIterator};
pub use batches::{BatchConfig, Batches};
pub use dataset::{make_dataset, Dataset};
pub use iterator::ExampleIterator;
pub use range::correct_range_size;
