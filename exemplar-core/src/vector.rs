use num_traits::Zero;
use std::fmt;

/// Fraction of non-zero entries at or above which an `AutoVector` keeps its
/// values in a dense layout.
pub const AUTO_DENSITY_THRESHOLD: f64 = 0.5;

/// Common interface of feature vectors stored in example rows.
///
/// The length of a vector is its prefix length: the number of leading
/// entries needed to hold every stored value.
pub trait DataVector: Clone + fmt::Debug + fmt::Display {
    /// Returns the prefix length of the vector.
    fn len(&self) -> usize;

    /// Returns true if the vector has no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the entries as a dense `Vec`, `len()` values long.
    fn to_values(&self) -> Vec<f64>;
}

/// A feature vector storing every entry explicitly.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DenseVector {
    values: Vec<f64>,
}

impl DenseVector {
    /// Creates a new `DenseVector` owning `values`.
    pub fn new(values: Vec<f64>) -> Self {
        DenseVector { values }
    }

    /// Returns the stored values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the entry at `index`, or zero past the end of the vector.
    pub fn get(&self, index: usize) -> f64 {
        self.values.get(index).copied().unwrap_or(0.0)
    }
}

impl DataVector for DenseVector {
    fn len(&self) -> usize {
        self.values.len()
    }

    fn to_values(&self) -> Vec<f64> {
        self.values.clone()
    }
}

impl From<Vec<f64>> for DenseVector {
    fn from(values: Vec<f64>) -> Self {
        DenseVector::new(values)
    }
}

impl FromIterator<f64> for DenseVector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        DenseVector::new(iter.into_iter().collect())
    }
}

impl From<&AutoVector> for DenseVector {
    fn from(vector: &AutoVector) -> Self {
        DenseVector::new(vector.to_values())
    }
}

impl fmt::Display for DenseVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
enum AutoStorage {
    Dense(Vec<f64>),
    Sparse { indices: Vec<usize>, values: Vec<f64> },
}

/// A feature vector that picks its own layout.
///
/// Trailing zeros are dropped on construction. The remaining entries are kept
/// densely when the fraction of non-zeros reaches `AUTO_DENSITY_THRESHOLD`,
/// and as sorted index/value pairs otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct AutoVector {
    storage: AutoStorage,
}

impl AutoVector {
    /// Builds an `AutoVector` from dense values, choosing the layout.
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Self {
        let mut values: Vec<f64> = values.into_iter().collect();
        let prefix_len = values
            .iter()
            .rposition(|v| !v.is_zero())
            .map_or(0, |last| last + 1);
        values.truncate(prefix_len);

        let num_nonzeros = values.iter().filter(|v| !v.is_zero()).count();
        if prefix_len == 0 || num_nonzeros as f64 >= AUTO_DENSITY_THRESHOLD * prefix_len as f64 {
            return AutoVector {
                storage: AutoStorage::Dense(values),
            };
        }

        let (indices, values) = values
            .into_iter()
            .enumerate()
            .filter(|(_, v)| !v.is_zero())
            .unzip();
        AutoVector {
            storage: AutoStorage::Sparse { indices, values },
        }
    }

    /// Returns true if the entries are stored densely.
    pub fn is_dense(&self) -> bool {
        matches!(self.storage, AutoStorage::Dense(_))
    }

    /// Returns the number of non-zero entries.
    pub fn num_nonzeros(&self) -> usize {
        match &self.storage {
            AutoStorage::Dense(values) => values.iter().filter(|v| !v.is_zero()).count(),
            AutoStorage::Sparse { values, .. } => values.len(),
        }
    }

    /// Returns an iterator over `(index, value)` pairs of the non-zero entries.
    pub fn iter_nonzeros(&self) -> Box<dyn Iterator<Item = (usize, f64)> + '_> {
        match &self.storage {
            AutoStorage::Dense(values) => Box::new(
                values
                    .iter()
                    .copied()
                    .enumerate()
                    .filter(|(_, v)| !v.is_zero()),
            ),
            AutoStorage::Sparse { indices, values } => {
                Box::new(indices.iter().copied().zip(values.iter().copied()))
            }
        }
    }
}

impl DataVector for AutoVector {
    fn len(&self) -> usize {
        match &self.storage {
            AutoStorage::Dense(values) => values.len(),
            AutoStorage::Sparse { indices, .. } => indices.last().map_or(0, |last| last + 1),
        }
    }

    fn to_values(&self) -> Vec<f64> {
        match &self.storage {
            AutoStorage::Dense(values) => values.clone(),
            AutoStorage::Sparse { .. } => {
                let mut dense = vec![0.0; self.len()];
                for (index, value) in self.iter_nonzeros() {
                    dense[index] = value;
                }
                dense
            }
        }
    }
}

impl From<&DenseVector> for AutoVector {
    fn from(vector: &DenseVector) -> Self {
        AutoVector::from_values(vector.values().iter().copied())
    }
}

impl FromIterator<f64> for AutoVector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        AutoVector::from_values(iter)
    }
}

impl fmt::Display for AutoVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.storage {
            AutoStorage::Dense(values) => {
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", value)?;
                }
            }
            AutoStorage::Sparse { indices, values } => {
                for (i, (index, value)) in indices.iter().zip(values).enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}:{}", index, value)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "vector_test.rs"]
mod tests;
