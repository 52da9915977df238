//! A pager over a source with blocking lookups. This is what you need unless counting or fetching
//! items requires awaiting, see [`stream`](crate::stream) for that.

use crate::internal::Position;
use crate::render::{self, RenderOptions};
use crate::Error;
use std::cell::Cell;
use std::convert::Infallible;
use std::ops::{Range, RangeInclusive};

/// Where a [`Pager`] takes the total count and the items of a page from.
///
/// `count` is called at most once per pager. `items` is called on every
/// [`Pager::current_items`] call and should return a lazy sequence of the items in
/// `offset..offset + limit`.
pub trait ItemSource {
    type Items<'a>: IntoIterator
    where
        Self: 'a;
    type Error;

    fn count(&self) -> Result<usize, Self::Error>;

    fn items(&self, offset: usize, limit: usize) -> Result<Self::Items<'_>, Self::Error>;
}

impl<T> ItemSource for [T] {
    type Items<'a> = std::slice::Iter<'a, T> where Self: 'a;
    type Error = Infallible;

    fn count(&self) -> Result<usize, Infallible> {
        Ok(self.len())
    }

    fn items(&self, offset: usize, limit: usize) -> Result<Self::Items<'_>, Infallible> {
        Ok(self[clamp(offset, limit, self.len())].iter())
    }
}

impl<T> ItemSource for Vec<T> {
    type Items<'a> = std::slice::Iter<'a, T> where Self: 'a;
    type Error = Infallible;

    fn count(&self) -> Result<usize, Infallible> {
        ItemSource::count(self.as_slice())
    }

    fn items(&self, offset: usize, limit: usize) -> Result<Self::Items<'_>, Infallible> {
        ItemSource::items(self.as_slice(), offset, limit)
    }
}

impl<S> ItemSource for &S
where
    S: ItemSource + ?Sized,
{
    type Items<'a> = S::Items<'a> where Self: 'a;
    type Error = S::Error;

    fn count(&self) -> Result<usize, Self::Error> {
        (**self).count()
    }

    fn items(&self, offset: usize, limit: usize) -> Result<Self::Items<'_>, Self::Error> {
        (**self).items(offset, limit)
    }
}

pub(crate) fn clamp(offset: usize, limit: usize, len: usize) -> Range<usize> {
    offset.min(len)..offset.saturating_add(limit).min(len)
}

/// Page arithmetic and link rendering over an [`ItemSource`].
///
/// The item count is looked up on first use and cached for the lifetime of the pager, so a pager
/// is meant to live as long as a single page view. It is not `Sync`.
#[derive(Debug)]
pub struct Pager<S> {
    source: S,
    page_size: usize,
    current_page: usize,
    item_count: Cell<Option<usize>>,
}

impl<S> Pager<S>
where
    S: ItemSource,
{
    /// Creates a pager positioned on the first page. Fails if `page_size` is zero.
    pub fn new(source: S, page_size: usize) -> Result<Self, Error<S::Error>> {
        if page_size == 0 {
            return Err(Error::InvalidPageSize);
        }

        Ok(Self {
            source,
            page_size,
            current_page: 1,
            item_count: Cell::new(None),
        })
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Total number of items. Asks the source only the first time it succeeds.
    pub fn item_count(&self) -> Result<usize, S::Error> {
        if let Some(count) = self.item_count.get() {
            return Ok(count);
        }

        let count = self.source.count()?;
        self.item_count.set(Some(count));

        tracing::debug!(
            item_count = count,
            page_size = self.page_size,
            page_count = crate::internal::page_count(count, self.page_size),
            "resolved item count"
        );

        Ok(count)
    }

    /// Number of pages, at least one even when there are no items.
    pub fn page_count(&self) -> Result<usize, S::Error> {
        Ok(self.position()?.page_count())
    }

    pub fn page_exists(&self, page: usize) -> Result<bool, S::Error> {
        Ok(self.position()?.page_exists(page))
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Moves the pager to `page`. An out of range page leaves the pager where it was.
    pub fn set_current_page(&mut self, page: usize) -> Result<(), Error<S::Error>> {
        let position = self.position().map_err(Error::Source)?;

        if !position.page_exists(page) {
            let page_count = position.page_count();
            tracing::debug!(page, page_count, "rejected page out of range");
            return Err(Error::PageOutOfRange { page, page_count });
        }

        self.current_page = page;
        Ok(())
    }

    pub fn page_offset_exists(&self, offset: isize) -> Result<bool, S::Error> {
        Ok(self.page_by_offset(offset)?.is_some())
    }

    /// The page `offset` pages away from the current one, `None` if there is no such page.
    pub fn page_by_offset(&self, offset: isize) -> Result<Option<usize>, S::Error> {
        Ok(self.position()?.page_by_offset(offset))
    }

    pub fn previous_page(&self) -> Result<Option<usize>, S::Error> {
        self.page_by_offset(-1)
    }

    pub fn next_page(&self) -> Result<Option<usize>, S::Error> {
        self.page_by_offset(1)
    }

    /// At most `limit` consecutive pages around the current one. The run is shifted to stay
    /// within existing pages instead of being cut, see the [crate docs](crate) for examples.
    pub fn adjacent_pages(&self, limit: usize) -> Result<RangeInclusive<usize>, S::Error> {
        Ok(self.position()?.adjacent_pages(limit))
    }

    /// Indices of the items on the current page.
    pub fn current_range(&self) -> Result<Range<usize>, S::Error> {
        Ok(self.position()?.item_range())
    }

    /// Fetches the items of the current page. The source is asked on every call.
    pub fn current_items(&self) -> Result<S::Items<'_>, S::Error> {
        let range = self.current_range()?;
        tracing::trace!(offset = range.start, limit = range.len(), "fetching page items");

        self.source.items(range.start, range.len())
    }

    /// Renders the pagination links of the current page as an HTML fragment.
    pub fn render(&self, options: &RenderOptions) -> Result<String, S::Error> {
        let position = self.position()?;
        Ok(render::render(
            position.current,
            position.page_count(),
            options,
        ))
    }

    fn position(&self) -> Result<Position, S::Error> {
        Ok(Position::new(
            self.current_page,
            self.page_size,
            self.item_count()?,
        ))
    }
}
