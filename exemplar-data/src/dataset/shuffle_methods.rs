use super::Dataset;
use crate::range::correct_range_size;
use exemplar_core::{ExemplarError, Row};
use log::{debug, trace, warn};
use rand::Rng;

/// This `impl` block provides the randomized reorderings used to draw
/// minibatches.
///
/// The random generator always belongs to the caller and is only borrowed, so
/// a fixed seed and the same sequence of calls reproduce the same order.
impl<T: Row> Dataset<T> {
    /// Swaps the row at `target_index` with a row drawn uniformly from
    /// `[range_first, range_first + range_size)`. Drawing the target itself
    /// leaves the dataset unchanged.
    ///
    /// `range_size` is normalized like every other range.
    ///
    /// # Errors
    ///
    /// * `IndexOutOfBounds` if `target_index >= num_examples()`.
    /// * `RangeOutOfBounds` if `range_first > num_examples()`, or if the
    ///   normalized range is empty.
    ///
    /// The dataset is left untouched on error.
    pub fn random_swap<R>(
        &mut self,
        rng: &mut R,
        target_index: usize,
        range_first: usize,
        range_size: usize,
    ) -> Result<(), ExemplarError>
    where
        R: Rng + ?Sized,
    {
        let len = self.examples.len();
        if target_index >= len {
            return Err(ExemplarError::IndexOutOfBounds {
                index: target_index,
                len,
            });
        }
        let range_size = correct_range_size(range_first, range_size, len)?;
        if range_size == 0 {
            return Err(ExemplarError::RangeOutOfBounds {
                from_index: range_first,
                len,
            });
        }

        let drawn = rng.gen_range(range_first..range_first + range_size);
        trace!("Dataset: random_swap {} <-> {}", target_index, drawn);
        self.examples.swap(target_index, drawn);
        Ok(())
    }

    /// Shuffles the first `prefix_size` rows: afterwards they are a uniform
    /// random sample, without replacement, of all the rows. The rows after the
    /// prefix hold the leftovers in no meaningful order.
    ///
    /// A `prefix_size` of zero, or larger than the dataset, shuffles every row.
    pub fn random_permute<R>(&mut self, rng: &mut R, prefix_size: usize) -> Result<(), ExemplarError>
    where
        R: Rng + ?Sized,
    {
        self.random_permute_range(rng, 0, 0, prefix_size)
    }

    /// Shuffles the first `prefix_size` rows of the range
    /// `[range_first, range_first + range_size)` with rows drawn from that
    /// same range. Rows outside the range never move.
    ///
    /// A `prefix_size` of zero, or larger than the normalized range, shuffles
    /// the whole range.
    ///
    /// # Errors
    ///
    /// Returns `RangeOutOfBounds` if `range_first > num_examples()`.
    pub fn random_permute_range<R>(
        &mut self,
        rng: &mut R,
        range_first: usize,
        range_size: usize,
        prefix_size: usize,
    ) -> Result<(), ExemplarError>
    where
        R: Rng + ?Sized,
    {
        let range_size = correct_range_size(range_first, range_size, self.examples.len())?;
        let prefix_size = if prefix_size == 0 || prefix_size > range_size {
            if prefix_size > range_size {
                warn!(
                    "Dataset: permute prefix {} exceeds range size {}, shuffling the whole range",
                    prefix_size, range_size
                );
            }
            range_size
        } else {
            prefix_size
        };
        debug!(
            "Dataset: permuting prefix {} of range [{}, {})",
            prefix_size,
            range_first,
            range_first + range_size
        );

        let range_end = range_first + range_size;
        for i in range_first..range_first + prefix_size {
            self.random_swap(rng, i, i, range_end - i)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "shuffle_methods_test.rs"]
mod tests;
