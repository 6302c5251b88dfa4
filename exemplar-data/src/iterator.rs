// exemplar-data/src/iterator.rs

use exemplar_core::FromExample;
use std::fmt;

/// A forward-only, single-pass sequence of examples of type `U`.
///
/// The sequence can be driven with the cursor methods (`is_valid`, `current`,
/// `advance`) or as an ordinary `Iterator`. Once exhausted it stays exhausted;
/// request a new sequence to iterate again.
///
/// A sequence obtained from a `Dataset` borrows the dataset's storage for `'a`,
/// so the dataset cannot be modified while the sequence is alive. Rows are
/// projected into `U` one at a time as the sequence is pulled.
pub struct ExampleIterator<'a, U> {
    rows: Box<dyn Iterator<Item = U> + 'a>,
    current: Option<U>,
}

impl<'a, U: 'a> ExampleIterator<'a, U> {
    /// Wraps any source of examples (a loader, a generator, another dataset's
    /// rows) as an `ExampleIterator`.
    pub fn new<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = U>,
        I::IntoIter: 'a,
    {
        let mut rows: Box<dyn Iterator<Item = U> + 'a> = Box::new(rows.into_iter());
        let current = rows.next();
        ExampleIterator { rows, current }
    }

    /// Creates a sequence viewing `rows`, projecting each one into `U`.
    pub(crate) fn over_rows<T>(rows: &'a [T]) -> Self
    where
        U: FromExample<T>,
    {
        Self::new(rows.iter().map(|row| U::from_example(row)))
    }
}

impl<'a, U> ExampleIterator<'a, U> {
    /// Returns true while the sequence has a current example.
    pub fn is_valid(&self) -> bool {
        self.current.is_some()
    }

    /// Returns the current example, or `None` once the sequence is exhausted.
    pub fn current(&self) -> Option<&U> {
        self.current.as_ref()
    }

    /// Moves to the next example. Does nothing once the sequence is exhausted.
    pub fn advance(&mut self) {
        if self.current.is_some() {
            self.current = self.rows.next();
        }
    }
}

impl<'a, U> Iterator for ExampleIterator<'a, U> {
    type Item = U;

    fn next(&mut self) -> Option<U> {
        let item = self.current.take()?;
        self.current = self.rows.next();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = usize::from(self.current.is_some());
        let (lower, upper) = self.rows.size_hint();
        (
            lower.saturating_add(pending),
            upper.and_then(|upper| upper.checked_add(pending)),
        )
    }
}

impl<'a, U> fmt::Debug for ExampleIterator<'a, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExampleIterator")
            .field("is_valid", &self.is_valid())
            .field("remaining", &self.size_hint())
            .finish()
    }
}
