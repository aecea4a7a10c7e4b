//! Defines the paged window type.

use std::{cmp, ops::Deref, slice, vec};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    error::{Error, Result},
    source::PageSource,
};

/// Sentinel page size meaning "all items, one page".
///
/// Passing this together with page index `0` to [`PagedList::from_source`]
/// materializes the source in full and skips the bounded fetch that a regular
/// page would issue.
pub const PAGE_SIZE_ALL: i64 = i64::MAX;

/// A bounded window over a larger logical collection, together with the
/// paging parameters needed to derive navigation metadata.
///
/// Only the window itself and the three paging parameters are stored. All
/// navigation metadata ([`PagedList::total_pages`],
/// [`PagedList::has_next_page`], ...) is recomputed on each call and can
/// never drift from the base state.
///
/// Arithmetic is signed throughout so that the empty-collection case falls
/// out of the formulas: zero total elements means zero total pages, and page
/// zero is then simultaneously the first and the last page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPagedList<T>")]
pub struct PagedList<T> {
    items: Vec<T>,
    page_index: i64,
    page_size: i64,
    total_count: i64,
}

/// Wire shape of [`PagedList`], accepted before validation.
///
/// Deserialization funnels through [`PagedList::from_parts`] so a decoded
/// page upholds the same construction invariants as a built one.
#[derive(Deserialize)]
struct RawPagedList<T> {
    items: Vec<T>,
    page_index: i64,
    page_size: i64,
    total_count: i64,
}

impl<T> TryFrom<RawPagedList<T>> for PagedList<T> {
    type Error = Error;

    fn try_from(raw: RawPagedList<T>) -> Result<Self> {
        Self::from_parts(raw.items, raw.page_index, raw.page_size, raw.total_count)
    }
}

impl<T> PagedList<T> {
    /// Creates a page by querying `source`.
    ///
    /// Issues one skip-then-limit fetch and one count against the source, in
    /// that order. The sentinel request (`page_index == 0`, `page_size ==
    /// PAGE_SIZE_ALL`) replaces the bounded fetch with a whole-collection
    /// materialization.
    pub fn from_source<S>(source: &S, page_index: i64, page_size: i64) -> Result<Self>
    where
        S: PageSource<Item = T> + ?Sized,
    {
        validate(page_index, page_size)?;

        let items = if page_index == 0 && page_size == PAGE_SIZE_ALL {
            source.all()?
        } else {
            source.slice(page_index * page_size, page_size)?
        };
        let total_count = source.count()?;

        let list = Self::from_parts(items, page_index, page_size, total_count)?;
        trace!(
            page_index,
            page_size,
            total_count,
            len = list.items.len(),
            "Materialized page from source."
        );

        Ok(list)
    }

    /// Creates a page from an already-materialized collection.
    ///
    /// Slices locally and records the collection length as the total count.
    /// No source round trip occurs.
    pub fn from_slice(source: &[T], page_index: i64, page_size: i64) -> Result<Self>
    where
        T: Clone,
    {
        validate(page_index, page_size)?;

        let skip = usize::try_from(page_index.saturating_mul(page_size)).unwrap_or(usize::MAX);
        let take = usize::try_from(page_size).unwrap_or(usize::MAX);
        let items = source.iter().skip(skip).take(take).cloned();
        let total_count = i64::try_from(source.len()).unwrap_or(i64::MAX);

        Self::from_parts(items, page_index, page_size, total_count)
    }

    /// Creates a page from an already-windowed sequence.
    ///
    /// The caller asserts that `items` holds exactly one page's worth of
    /// elements; no further slicing is performed. The other constructors
    /// converge here.
    pub fn from_parts<I>(
        items: I,
        page_index: i64,
        page_size: i64,
        total_count: i64,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        validate(page_index, page_size)?;

        Ok(Self {
            items: items.into_iter().collect(),
            page_index,
            page_size,
            total_count,
        })
    }

    /// The zero-based index of this page.
    #[must_use]
    pub fn page_index(&self) -> i64 {
        self.page_index
    }

    /// The maximum number of elements per page.
    #[must_use]
    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    /// The size of the whole logical collection this page is drawn from, not
    /// the size of the page itself.
    #[must_use]
    pub fn total_count(&self) -> i64 {
        self.total_count
    }

    /// The one-based ordinal of this page.
    #[must_use]
    pub fn page_number(&self) -> i64 {
        self.page_index + 1
    }

    /// Repositions the page by its one-based ordinal.
    pub fn set_page_number(&mut self, number: i64) {
        self.page_index = number - 1;
    }

    /// The number of pages the whole collection spans, rounding up.
    #[must_use]
    pub fn total_pages(&self) -> i64 {
        let mut total = self.total_count / self.page_size;
        if self.total_count % self.page_size > 0 {
            total += 1;
        }

        total
    }

    /// Whether a page precedes this one.
    #[must_use]
    pub fn has_previous_page(&self) -> bool {
        self.page_index > 0
    }

    /// Whether a page follows this one.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.page_index < self.total_pages() - 1
    }

    /// The one-based absolute index of the first item on this page.
    #[must_use]
    pub fn first_item_index(&self) -> i64 {
        self.page_index * self.page_size + 1
    }

    /// The one-based absolute index of the last item on this page, clamped to
    /// the total count.
    #[must_use]
    pub fn last_item_index(&self) -> i64 {
        cmp::min(
            self.total_count,
            self.page_index * self.page_size + self.page_size,
        )
    }

    /// Whether this is the first page.
    #[must_use]
    pub fn is_first_page(&self) -> bool {
        self.page_index <= 0
    }

    /// Whether this is the last page.
    ///
    /// Holds together with [`PagedList::is_first_page`] when the collection
    /// is empty.
    #[must_use]
    pub fn is_last_page(&self) -> bool {
        self.page_index >= self.total_pages() - 1
    }

    /// The elements of this page, in source order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consumes the page, returning its elements.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> Deref for PagedList<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T> IntoIterator for PagedList<T> {
    type IntoIter = vec::IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a PagedList<T> {
    type IntoIter = slice::Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn validate(page_index: i64, page_size: i64) -> Result<()> {
    if page_index < 0 {
        return Err(Error::PageIndex(page_index));
    }

    if page_size <= 0 {
        return Err(Error::PageSize(page_size));
    }

    Ok(())
}
