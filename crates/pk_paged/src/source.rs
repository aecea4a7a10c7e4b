//! The queryable-source contract and its in-memory adapters.

use crate::{error::Result, list::PagedList};

/// A collaborator that can count and window its elements.
///
/// Any datastore access layer supporting a count-of-all-elements operation
/// and a skip-then-limit materialization, both preserving iteration order,
/// can back [`PagedList::from_source`].
pub trait PageSource {
    type Item;

    /// The total number of elements in the underlying collection.
    fn count(&self) -> Result<i64>;

    /// Materializes up to `take` elements, starting after the first `skip`.
    ///
    /// Out-of-range arguments are not an error: a `skip` past the end yields
    /// an empty result, and fewer than `take` elements remaining yields a
    /// short one.
    fn slice(&self, skip: i64, take: i64) -> Result<Vec<Self::Item>>;

    /// Materializes the whole collection.
    ///
    /// Adapters may override this with a strategy cheaper than the default
    /// unbounded [`PageSource::slice`] call, for example one that benefits
    /// from query-plan reuse in the backing store.
    fn all(&self) -> Result<Vec<Self::Item>> {
        self.slice(0, i64::MAX)
    }
}

impl<T: Clone> PageSource for [T] {
    type Item = T;

    fn count(&self) -> Result<i64> {
        Ok(i64::try_from(self.len()).unwrap_or(i64::MAX))
    }

    fn slice(&self, skip: i64, take: i64) -> Result<Vec<T>> {
        let skip = usize::try_from(skip).unwrap_or(0);
        let take = usize::try_from(take).unwrap_or(0);

        Ok(self.iter().skip(skip).take(take).cloned().collect())
    }

    fn all(&self) -> Result<Vec<T>> {
        Ok(self.to_vec())
    }
}

impl<T: Clone> PageSource for Vec<T> {
    type Item = T;

    fn count(&self) -> Result<i64> {
        self.as_slice().count()
    }

    fn slice(&self, skip: i64, take: i64) -> Result<Vec<T>> {
        self.as_slice().slice(skip, take)
    }

    fn all(&self) -> Result<Vec<T>> {
        self.as_slice().all()
    }
}

/// Pages an in-memory collection directly, without the [`PageSource`]
/// round-trip accounting.
pub trait Paginate<T> {
    /// Returns the `page_index`th window of at most `page_size` elements.
    fn paginate(&self, page_index: i64, page_size: i64) -> Result<PagedList<T>>;
}

impl<T: Clone> Paginate<T> for [T] {
    fn paginate(&self, page_index: i64, page_size: i64) -> Result<PagedList<T>> {
        PagedList::from_slice(self, page_index, page_size)
    }
}
