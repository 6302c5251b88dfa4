// exemplar-data/src/range.rs

use exemplar_core::ExemplarError;

/// Normalizes a `(from_index, size)` row range against a dataset of `len` rows.
///
/// A `size` of zero, or one that runs past the end, means "through the end of
/// the dataset". The returned size always satisfies `from_index + size <= len`.
///
/// # Errors
///
/// Returns `ExemplarError::RangeOutOfBounds` if `from_index > len`.
pub fn correct_range_size(from_index: usize, size: usize, len: usize) -> Result<usize, ExemplarError> {
    if from_index > len {
        return Err(ExemplarError::RangeOutOfBounds { from_index, len });
    }
    let remaining = len - from_index;
    if size == 0 || size > remaining {
        Ok(remaining)
    } else {
        Ok(size)
    }
}
