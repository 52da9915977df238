//! A pager over a source whose lookups have to be awaited, like a database table. Page arithmetic
//! and rendering are the same as in [`Pager`](crate::Pager), only the count and the items come
//! from futures.
//!
//! Methods that may need the item count take `&mut self`, which keeps the returned futures `Send`
//! as long as the source is.

use crate::blocking::clamp;
use crate::internal::Position;
use crate::render::{self, RenderOptions};
use crate::Error;
use futures::stream::{self, BoxStream, Stream, StreamExt};
use std::convert::Infallible;
use std::future::Future;
use std::ops::{Range, RangeInclusive};

/// Where an [`AsyncPager`] takes the total count and the items of a page from.
///
/// `count` is awaited at most once per pager. `items` is called on every
/// [`AsyncPager::current_items`] call and yields the items in `offset..offset + limit` lazily.
pub trait StreamSource: Send + Sync {
    type Item: Send;
    type Error: Send;

    fn count(&self) -> impl Send + Future<Output = Result<usize, Self::Error>>;

    fn items(
        &self,
        offset: usize,
        limit: usize,
    ) -> impl Send + Stream<Item = Result<Self::Item, Self::Error>>;
}

impl<T> StreamSource for Vec<T>
where
    T: Clone + Send + Sync,
{
    type Item = T;
    type Error = Infallible;

    async fn count(&self) -> Result<usize, Infallible> {
        Ok(self.len())
    }

    fn items(
        &self,
        offset: usize,
        limit: usize,
    ) -> impl Send + Stream<Item = Result<T, Infallible>> {
        stream::iter(self[clamp(offset, limit, self.len())].iter().cloned().map(Ok))
    }
}

/// The async counterpart of [`Pager`](crate::Pager).
#[derive(Debug)]
pub struct AsyncPager<S> {
    source: S,
    page_size: usize,
    current_page: usize,
    item_count: Option<usize>,
}

impl<S> AsyncPager<S>
where
    S: StreamSource,
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
            item_count: None,
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

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Total number of items. Awaits the source only until a lookup succeeds.
    pub async fn item_count(&mut self) -> Result<usize, S::Error> {
        if let Some(count) = self.item_count {
            return Ok(count);
        }

        let count = self.source.count().await?;
        self.item_count = Some(count);

        tracing::debug!(
            item_count = count,
            page_size = self.page_size,
            page_count = crate::internal::page_count(count, self.page_size),
            "resolved item count"
        );

        Ok(count)
    }

    pub async fn page_count(&mut self) -> Result<usize, S::Error> {
        Ok(self.position().await?.page_count())
    }

    pub async fn page_exists(&mut self, page: usize) -> Result<bool, S::Error> {
        Ok(self.position().await?.page_exists(page))
    }

    pub async fn set_current_page(&mut self, page: usize) -> Result<(), Error<S::Error>> {
        let position = self.position().await.map_err(Error::Source)?;

        if !position.page_exists(page) {
            let page_count = position.page_count();
            tracing::debug!(page, page_count, "rejected page out of range");
            return Err(Error::PageOutOfRange { page, page_count });
        }

        self.current_page = page;
        Ok(())
    }

    pub async fn page_offset_exists(&mut self, offset: isize) -> Result<bool, S::Error> {
        Ok(self.page_by_offset(offset).await?.is_some())
    }

    pub async fn page_by_offset(&mut self, offset: isize) -> Result<Option<usize>, S::Error> {
        Ok(self.position().await?.page_by_offset(offset))
    }

    pub async fn previous_page(&mut self) -> Result<Option<usize>, S::Error> {
        self.page_by_offset(-1).await
    }

    pub async fn next_page(&mut self) -> Result<Option<usize>, S::Error> {
        self.page_by_offset(1).await
    }

    pub async fn adjacent_pages(
        &mut self,
        limit: usize,
    ) -> Result<RangeInclusive<usize>, S::Error> {
        Ok(self.position().await?.adjacent_pages(limit))
    }

    pub async fn current_range(&mut self) -> Result<Range<usize>, S::Error> {
        Ok(self.position().await?.item_range())
    }

    /// Streams the items of the current page. The source is asked on every call.
    pub async fn current_items(
        &mut self,
    ) -> Result<BoxStream<'_, Result<S::Item, S::Error>>, S::Error> {
        let range = self.current_range().await?;
        tracing::trace!(offset = range.start, limit = range.len(), "fetching page items");

        Ok(self.source.items(range.start, range.len()).boxed())
    }

    pub async fn render(&mut self, options: &RenderOptions) -> Result<String, S::Error> {
        let position = self.position().await?;
        Ok(render::render(
            position.current,
            position.page_count(),
            options,
        ))
    }

    async fn position(&mut self) -> Result<Position, S::Error> {
        let item_count = self.item_count().await?;
        Ok(Position::new(self.current_page, self.page_size, item_count))
    }
}
