use super::Dataset;
use crate::iterator::ExampleIterator;
use crate::range::correct_range_size;
use exemplar_core::{ExemplarError, FromExample, Row};
use log::debug;
use std::fmt;

/// This `impl` block provides the operations that act on a `(from_index, size)`
/// range of rows.
///
/// Every range is normalized with `correct_range_size` first: a `size` of zero,
/// or one running past the end, means "through the last row", and a
/// `from_index` past the end is a `RangeOutOfBounds` error.
impl<T: Row> Dataset<T> {
    /// Returns the rows of a range as a slice.
    pub fn examples(&self, from_index: usize, size: usize) -> Result<&[T], ExemplarError> {
        let size = correct_range_size(from_index, size, self.examples.len())?;
        Ok(&self.examples[from_index..from_index + size])
    }

    /// Returns a lazy sequence over a range of rows, each projected into `U`
    /// as it is pulled (a clone when `U` is `T`).
    ///
    /// The sequence borrows the dataset's storage; no rows are copied up front.
    pub fn iter_range<'a, U>(&'a self, from_index: usize, size: usize) -> Result<ExampleIterator<'a, U>, ExemplarError>
    where
        U: FromExample<T> + 'a,
    {
        Ok(ExampleIterator::over_rows(self.examples(from_index, size)?))
    }

    /// Copies a range of rows into a new dataset, projecting them into `U`.
    pub fn sub_dataset<U>(&self, from_index: usize, size: usize) -> Result<Dataset<U>, ExemplarError>
    where
        U: Row + FromExample<T>,
    {
        let mut dataset = Dataset::new();
        for example in self.examples(from_index, size)? {
            dataset.add_example(U::from_example(example));
        }
        Ok(dataset)
    }

    /// Sorts a range of rows by ascending `key`.
    ///
    /// The sort is not stable. Rows outside the range are untouched.
    pub fn sort_by_key<K, F>(&mut self, key: F, from_index: usize, size: usize) -> Result<(), ExemplarError>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        let size = correct_range_size(from_index, size, self.examples.len())?;
        debug!("Dataset: sorting {} examples starting at {}", size, from_index);
        self.examples[from_index..from_index + size].sort_unstable_by_key(key);
        Ok(())
    }

    /// Sorts a range of rows by an ascending floating-point `key`.
    ///
    /// Keys are compared with `f64::total_cmp`, so NaN keys sort last.
    pub fn sort_by_f64_key<F>(&mut self, mut key: F, from_index: usize, size: usize) -> Result<(), ExemplarError>
    where
        F: FnMut(&T) -> f64,
    {
        let size = correct_range_size(from_index, size, self.examples.len())?;
        debug!("Dataset: sorting {} examples by f64 key starting at {}", size, from_index);
        self.examples[from_index..from_index + size].sort_unstable_by(|a, b| key(a).total_cmp(&key(b)));
        Ok(())
    }

    /// Reorders a range of rows so that every row satisfying `predicate` comes
    /// before every row that does not.
    ///
    /// Returns the index of the first row that does not satisfy `predicate`
    /// (the end of the range if all of them do). Relative order within each
    /// side is not preserved.
    pub fn partition<P>(&mut self, mut predicate: P, from_index: usize, size: usize) -> Result<usize, ExemplarError>
    where
        P: FnMut(&T) -> bool,
    {
        let size = correct_range_size(from_index, size, self.examples.len())?;
        let mut boundary = from_index;
        for i in from_index..from_index + size {
            if predicate(&self.examples[i]) {
                self.examples.swap(boundary, i);
                boundary += 1;
            }
        }
        debug!(
            "Dataset: partitioned {} examples starting at {}, boundary at {}",
            size, from_index, boundary
        );
        Ok(boundary)
    }

    /// Writes a range of rows to `out`, one row per line, each line indented by
    /// `indent` spaces.
    pub fn print<W>(&self, out: &mut W, indent: usize, from_index: usize, size: usize) -> Result<(), ExemplarError>
    where
        W: fmt::Write + ?Sized,
    {
        for example in self.examples(from_index, size)? {
            writeln!(out, "{:indent$}{}", "", example, indent = indent)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "range_methods_test.rs"]
mod tests;
