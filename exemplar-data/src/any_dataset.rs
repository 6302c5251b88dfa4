// exemplar-data/src/any_dataset.rs
//! Type-erased access to datasets.
//!
//! Code that drives training usually does not care which row type a dataset
//! stores; it only wants examples of some type `U` out of a range of rows.
//! `AnyDataset` is that handle. Underneath it holds a `DatasetRef`, a closed sum
//! type over every concrete dataset type this crate supports, and resolves it
//! with an exhaustive `match` through `DatasetVisitor`. Generic work such as
//! "give me an iterator of `U`" is packaged as a visitor (`GetIterator<U>`), so
//! the concrete type is resolved once per call and ordinary generic code runs
//! from there.

use crate::batches::{BatchConfig, Batches};
use crate::dataset::Dataset;
use crate::iterator::ExampleIterator;
use crate::range::correct_range_size;
use exemplar_core::{AutoExample, DenseExample, ExemplarError, FromExample};
use std::fmt;
use std::marker::PhantomData;

/// A borrowed reference to one of the supported concrete datasets.
#[derive(Debug, Clone, Copy)]
pub enum DatasetRef<'a> {
    Dense(&'a Dataset<DenseExample>),
    Auto(&'a Dataset<AutoExample>),
}

/// An operation that can run on any supported concrete dataset.
///
/// Implement one method per dataset type; `DatasetRef::accept` calls the one
/// matching the referenced dataset.
pub trait DatasetVisitor<'a> {
    type Output;

    fn visit_dense(self, dataset: &'a Dataset<DenseExample>) -> Self::Output;

    fn visit_auto(self, dataset: &'a Dataset<AutoExample>) -> Self::Output;
}

impl<'a> DatasetRef<'a> {
    /// Runs `visitor` on the referenced dataset.
    pub fn accept<V: DatasetVisitor<'a>>(self, visitor: V) -> V::Output {
        match self {
            DatasetRef::Dense(dataset) => visitor.visit_dense(dataset),
            DatasetRef::Auto(dataset) => visitor.visit_auto(dataset),
        }
    }

    /// Returns the number of rows of the referenced dataset.
    pub fn num_examples(self) -> usize {
        match self {
            DatasetRef::Dense(dataset) => dataset.num_examples(),
            DatasetRef::Auto(dataset) => dataset.num_examples(),
        }
    }

    /// Returns the largest feature-vector length of the referenced dataset.
    pub fn max_example_size(self) -> usize {
        match self {
            DatasetRef::Dense(dataset) => dataset.max_example_size(),
            DatasetRef::Auto(dataset) => dataset.max_example_size(),
        }
    }
}

impl<'a> From<&'a Dataset<DenseExample>> for DatasetRef<'a> {
    fn from(dataset: &'a Dataset<DenseExample>) -> Self {
        DatasetRef::Dense(dataset)
    }
}

impl<'a> From<&'a Dataset<AutoExample>> for DatasetRef<'a> {
    fn from(dataset: &'a Dataset<AutoExample>) -> Self {
        DatasetRef::Auto(dataset)
    }
}

/// Example types that every supported dataset can project its rows into.
pub trait AnyExample: FromExample<DenseExample> + FromExample<AutoExample> {}

impl<U> AnyExample for U where U: FromExample<DenseExample> + FromExample<AutoExample> {}

/// Visitor building an `ExampleIterator<U>` over `(from_index, size)` of
/// whichever dataset it is applied to.
pub struct GetIterator<U> {
    from_index: usize,
    size: usize,
    _marker: PhantomData<fn() -> U>,
}

impl<U> GetIterator<U> {
    pub fn new(from_index: usize, size: usize) -> Self {
        GetIterator {
            from_index,
            size,
            _marker: PhantomData,
        }
    }
}

impl<'a, U: AnyExample + 'a> DatasetVisitor<'a> for GetIterator<U> {
    type Output = Result<ExampleIterator<'a, U>, ExemplarError>;

    fn visit_dense(self, dataset: &'a Dataset<DenseExample>) -> Self::Output {
        dataset.iter_range(self.from_index, self.size)
    }

    fn visit_auto(self, dataset: &'a Dataset<AutoExample>) -> Self::Output {
        dataset.iter_range(self.from_index, self.size)
    }
}

/// Visitor writing `(from_index, size)` of a dataset to `out`.
struct PrintRange<'w, W: ?Sized> {
    out: &'w mut W,
    indent: usize,
    from_index: usize,
    size: usize,
}

impl<'a, 'w, W> DatasetVisitor<'a> for PrintRange<'w, W>
where
    W: fmt::Write + ?Sized,
{
    type Output = Result<(), ExemplarError>;

    fn visit_dense(self, dataset: &'a Dataset<DenseExample>) -> Self::Output {
        dataset.print(self.out, self.indent, self.from_index, self.size)
    }

    fn visit_auto(self, dataset: &'a Dataset<AutoExample>) -> Self::Output {
        dataset.print(self.out, self.indent, self.from_index, self.size)
    }
}

/// A type-erased view of a `(from_index, size)` range of a dataset.
///
/// The view owns nothing and borrows the dataset for `'a`. The range is
/// normalized when the view is used, not when it is created.
#[derive(Debug, Clone, Copy)]
pub struct AnyDataset<'a> {
    dataset: DatasetRef<'a>,
    from_index: usize,
    size: usize,
}

impl<'a> AnyDataset<'a> {
    /// Creates a view of `size` rows of `dataset` starting at `from_index`.
    /// A `size` of zero means "through the last row".
    pub fn new<D: Into<DatasetRef<'a>>>(dataset: D, from_index: usize, size: usize) -> Self {
        AnyDataset {
            dataset: dataset.into(),
            from_index,
            size,
        }
    }

    /// Returns a lazy sequence over the view's rows projected into `U`.
    pub fn iter<U: AnyExample + 'a>(&self) -> Result<ExampleIterator<'a, U>, ExemplarError> {
        self.dataset.accept(GetIterator::new(self.from_index, self.size))
    }

    /// Returns the number of rows the view covers once its range is normalized.
    pub fn num_examples(&self) -> Result<usize, ExemplarError> {
        correct_range_size(self.from_index, self.size, self.dataset.num_examples())
    }

    /// Splits the view into consecutive minibatch views.
    pub fn batches(&self, config: BatchConfig) -> Result<Batches<'a>, ExemplarError> {
        Batches::over_range(self.dataset, self.from_index, self.size, config)
    }

    pub fn dataset(&self) -> DatasetRef<'a> {
        self.dataset
    }

    pub fn from_index(&self) -> usize {
        self.from_index
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Writes the view's rows to `out`, one per line, indented by `indent`
    /// spaces.
    pub fn print<W>(&self, out: &mut W, indent: usize) -> Result<(), ExemplarError>
    where
        W: fmt::Write + ?Sized,
    {
        self.dataset.accept(PrintRange {
            out,
            indent,
            from_index: self.from_index,
            size: self.size,
        })
    }
}

impl<'a> From<&'a Dataset<DenseExample>> for AnyDataset<'a> {
    fn from(dataset: &'a Dataset<DenseExample>) -> Self {
        AnyDataset::new(dataset, 0, 0)
    }
}

impl<'a> From<&'a Dataset<AutoExample>> for AnyDataset<'a> {
    fn from(dataset: &'a Dataset<AutoExample>) -> Self {
        AnyDataset::new(dataset, 0, 0)
    }
}

#[cfg(test)]
#[path = "any_dataset_test.rs"]
mod tests;
