// exemplar-data/src/batches.rs
//! # Minibatches
//!
//! Splits a dataset (or a range of one) into consecutive `AnyDataset` views of
//! a fixed size, for feeding a training loop.
//!
//! ```rust
//! use exemplar_core::utils::testing::labeled_examples;
//! use exemplar_core::DenseExample;
//! use exemplar_data::{BatchConfig, Batches, Dataset};
//!
//! let dataset: Dataset<DenseExample> =
//!     Dataset::from_examples(labeled_examples(&[1.0, 2.0, 3.0, 4.0, 5.0])).unwrap();
//! let batches = Batches::new(&dataset, BatchConfig::new(2)).unwrap();
//! let sizes: Vec<usize> = batches.map(|batch| batch.num_examples().unwrap()).collect();
//! assert_eq!(sizes, vec![2, 2, 1]);
//! ```

use crate::any_dataset::{AnyDataset, DatasetRef};
use crate::range::correct_range_size;
use exemplar_core::ExemplarError;
use log::debug;

/// Configuration for splitting a dataset into minibatches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchConfig {
    /// Number of rows per batch.
    pub batch_size: usize,
    /// If true, the last batch is skipped when it is incomplete.
    pub drop_last: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            batch_size: 32,
            drop_last: false,
        }
    }
}

impl BatchConfig {
    pub fn new(batch_size: usize) -> Self {
        BatchConfig {
            batch_size,
            ..Self::default()
        }
    }

    pub fn with_drop_last(mut self, drop_last: bool) -> Self {
        self.drop_last = drop_last;
        self
    }

    /// Checks that the configuration can produce batches.
    ///
    /// # Errors
    ///
    /// Returns `ExemplarError::InvalidArgument` if `batch_size` is zero.
    pub fn validate(&self) -> Result<(), ExemplarError> {
        if self.batch_size == 0 {
            return Err(ExemplarError::InvalidArgument(
                "batch_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Iterator over consecutive minibatch views of a dataset.
///
/// Every batch holds `batch_size` rows except possibly the last one, which
/// holds the remainder unless `drop_last` is set.
#[derive(Debug, Clone)]
pub struct Batches<'a> {
    dataset: DatasetRef<'a>,
    config: BatchConfig,
    next_index: usize,
    end: usize,
}

impl<'a> Batches<'a> {
    /// Creates batches covering every row of `dataset`.
    pub fn new<D: Into<DatasetRef<'a>>>(dataset: D, config: BatchConfig) -> Result<Self, ExemplarError> {
        Self::over_range(dataset.into(), 0, 0, config)
    }

    /// Creates batches covering the normalized range `(from_index, size)`.
    pub(crate) fn over_range(
        dataset: DatasetRef<'a>,
        from_index: usize,
        size: usize,
        config: BatchConfig,
    ) -> Result<Self, ExemplarError> {
        config.validate()?;
        let size = correct_range_size(from_index, size, dataset.num_examples())?;
        debug!(
            "Batches: {} examples starting at {}, batch_size {}, drop_last {}",
            size, from_index, config.batch_size, config.drop_last
        );
        Ok(Batches {
            dataset,
            config,
            next_index: from_index,
            end: from_index + size,
        })
    }

    /// Returns the number of batches left to yield.
    pub fn num_batches(&self) -> usize {
        let remaining = self.end - self.next_index;
        if self.config.drop_last {
            remaining / self.config.batch_size
        } else {
            remaining.div_ceil(self.config.batch_size)
        }
    }
}

impl<'a> Iterator for Batches<'a> {
    type Item = AnyDataset<'a>;

    fn next(&mut self) -> Option<AnyDataset<'a>> {
        if self.next_index >= self.end {
            return None;
        }
        let size = (self.end - self.next_index).min(self.config.batch_size);
        if self.config.drop_last && size < self.config.batch_size {
            self.next_index = self.end;
            return None;
        }
        let batch = AnyDataset::new(self.dataset, self.next_index, size);
        self.next_index += size;
        Some(batch)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.num_batches();
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for Batches<'a> {}

#[cfg(test)]
#[path = "batches_test.rs"]
mod tests;
