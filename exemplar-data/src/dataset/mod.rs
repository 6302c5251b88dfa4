// exemplar-data/src/dataset/mod.rs

use exemplar_core::{ExemplarError, Row, TryFromExample};
use log::debug;
use std::fmt;
use std::ops::Index;

// --- Method groups, one `impl Dataset<T>` block per file ---
mod range_methods;
mod shuffle_methods;

/// An in-memory, ordered collection of examples of one row type `T`.
///
/// The dataset exclusively owns its rows; the insertion order is the row index.
/// It also tracks the largest feature-vector length among its rows
/// (`max_example_size`), which is zero for an empty dataset.
///
/// Iterators and views created from a dataset borrow it, so the borrow checker
/// rules out adding, resetting or reordering rows while one of them is alive.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<T> {
    pub(crate) examples: Vec<T>,
    pub(crate) max_example_size: usize,
}

impl<T> Default for Dataset<T> {
    fn default() -> Self {
        Dataset {
            examples: Vec::new(),
            max_example_size: 0,
        }
    }
}

impl<T: Row> Dataset<T> {
    /// Creates an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a dataset by draining a sequence of examples, converting each one
    /// into the row type `T`.
    ///
    /// Any `IntoIterator` works, including an `ExampleIterator` over another
    /// dataset. An empty sequence yields an empty dataset.
    ///
    /// # Errors
    ///
    /// Returns the error of the first conversion that fails.
    pub fn from_examples<S, I>(examples: I) -> Result<Self, ExemplarError>
    where
        I: IntoIterator<Item = S>,
        T: TryFromExample<S>,
    {
        let mut dataset = Self::new();
        dataset.extend_from(examples)?;
        Ok(dataset)
    }

    /// Appends every example of a sequence, converting each one into `T`.
    ///
    /// Returns the number of rows appended.
    ///
    /// # Errors
    ///
    /// Returns the error of the first conversion that fails. Rows appended
    /// before the failure stay in the dataset.
    pub fn extend_from<S, I>(&mut self, examples: I) -> Result<usize, ExemplarError>
    where
        I: IntoIterator<Item = S>,
        T: TryFromExample<S>,
    {
        let mut appended = 0;
        for source in examples {
            self.add_example(T::try_from_example(source)?);
            appended += 1;
        }
        debug!(
            "Dataset: appended {} examples, now {} (max example size {})",
            appended,
            self.examples.len(),
            self.max_example_size
        );
        Ok(appended)
    }

    /// Returns the number of rows.
    pub fn num_examples(&self) -> usize {
        self.examples.len()
    }

    /// Returns true if the dataset holds no rows.
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Returns the largest feature-vector length among the rows.
    pub fn max_example_size(&self) -> usize {
        self.max_example_size
    }

    /// Returns the row at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ExemplarError::IndexOutOfBounds` if `index >= num_examples()`.
    pub fn get(&self, index: usize) -> Result<&T, ExemplarError> {
        self.examples.get(index).ok_or(ExemplarError::IndexOutOfBounds {
            index,
            len: self.examples.len(),
        })
    }

    /// Modifies the row at `index` in place, keeping `max_example_size` exact.
    ///
    /// # Errors
    ///
    /// Returns `ExemplarError::IndexOutOfBounds` if `index >= num_examples()`.
    pub fn update_example<F>(&mut self, index: usize, update: F) -> Result<(), ExemplarError>
    where
        F: FnOnce(&mut T),
    {
        let len = self.examples.len();
        let example = self
            .examples
            .get_mut(index)
            .ok_or(ExemplarError::IndexOutOfBounds { index, len })?;
        let old_size = example.feature_len();
        update(&mut *example);
        let new_size = example.feature_len();

        if new_size >= self.max_example_size {
            self.max_example_size = new_size;
        } else if old_size == self.max_example_size {
            // The row may have been the only one at the maximum.
            self.max_example_size = self.examples.iter().map(Row::feature_len).max().unwrap_or(0);
        }
        Ok(())
    }

    /// Appends a row.
    pub fn add_example(&mut self, example: T) {
        self.max_example_size = self.max_example_size.max(example.feature_len());
        self.examples.push(example);
    }

    /// Removes every row.
    pub fn reset(&mut self) {
        debug!("Dataset: reset, dropping {} examples", self.examples.len());
        self.examples.clear();
        self.max_example_size = 0;
    }
}

/// Builds a dataset from a sequence of examples in one call.
///
/// Shorthand for `Dataset::from_examples`.
pub fn make_dataset<T, S, I>(examples: I) -> Result<Dataset<T>, ExemplarError>
where
    T: Row + TryFromExample<S>,
    I: IntoIterator<Item = S>,
{
    Dataset::from_examples(examples)
}

impl<T> Index<usize> for Dataset<T> {
    type Output = T;

    /// # Panics
    /// Panics if `index` is out of bounds, like `Vec` indexing.
    fn index(&self, index: usize) -> &T {
        &self.examples[index]
    }
}

impl<'a, T> IntoIterator for &'a Dataset<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.examples.iter()
    }
}

impl<T: Row> fmt::Display for Dataset<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print(f, 0, 0, 0).map_err(|_| fmt::Error)
    }
}
