use thiserror::Error;

/// Errors produced by pager operations that can fail for reasons other than the item source.
///
/// Operations that only fail when the source fails (`item_count`, `page_count`, `render`, ...)
/// return the source error as is. `Error` appears where a pager check and a source lookup can
/// both fail, like [`Pager::set_current_page`](crate::Pager::set_current_page).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error<E> {
    #[error("page {page} is out of range, the pager has {page_count} page(s)")]
    PageOutOfRange { page: usize, page_count: usize },

    #[error("page size must be positive")]
    InvalidPageSize,

    #[error(transparent)]
    Source(E),
}
