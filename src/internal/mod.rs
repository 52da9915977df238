//! Page arithmetic shared by the blocking and the stream pagers.
//!
//! Both flavours resolve the item count differently but once it is known everything else is the
//! same pure computation, so they build a [`Position`] and ask it.

pub mod window;

use std::ops::{Range, RangeInclusive};

/// A resolved pager state: the count is known and the current page is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub current: usize,
    pub page_size: usize,
    pub item_count: usize,
}

impl Position {
    pub fn new(current: usize, page_size: usize, item_count: usize) -> Self {
        Self {
            current,
            page_size,
            item_count,
        }
    }

    pub fn page_count(&self) -> usize {
        page_count(self.item_count, self.page_size)
    }

    pub fn page_exists(&self, page: usize) -> bool {
        (1..=self.page_count()).contains(&page)
    }

    pub fn page_by_offset(&self, offset: isize) -> Option<usize> {
        self.current
            .checked_add_signed(offset)
            .filter(|page| self.page_exists(*page))
    }

    pub fn adjacent_pages(&self, limit: usize) -> RangeInclusive<usize> {
        window::adjacent(self.current, limit, self.page_count())
    }

    /// Indices of the items on the current page. The last page may be shorter than the page
    /// size and an empty source yields an empty range.
    pub fn item_range(&self) -> Range<usize> {
        let offset = (self.current - 1) * self.page_size;
        let limit = self.page_size.min(self.item_count.saturating_sub(offset));
        offset..offset + limit
    }
}

pub fn page_count(item_count: usize, page_size: usize) -> usize {
    item_count.div_ceil(page_size).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(17, 5 => 4; "partial last page")]
    #[test_case(15, 5 => 3; "exact fit")]
    #[test_case(0, 5 => 1; "empty source still has one page")]
    #[test_case(1, 5 => 1; "single item")]
    #[test_case(6, 1 => 6; "page size one")]
    fn counts_pages(item_count: usize, page_size: usize) -> usize {
        page_count(item_count, page_size)
    }

    #[test]
    fn page_count_property() {
        for page_size in 1..=7 {
            for item_count in 0..=50 {
                let expected = std::cmp::max(1, (item_count + page_size - 1) / page_size);
                assert_eq!(page_count(item_count, page_size), expected);
            }
        }
    }

    #[test]
    fn offsets_are_clipped_to_existing_pages() {
        let position = Position::new(3, 5, 17);

        assert_eq!(position.page_by_offset(-1), Some(2));
        assert_eq!(position.page_by_offset(1), Some(4));
        assert_eq!(position.page_by_offset(-2), Some(1));
        assert_eq!(position.page_by_offset(-3), None);
        assert_eq!(position.page_by_offset(2), None);
        assert_eq!(position.page_by_offset(isize::MIN), None);
        assert_eq!(position.page_by_offset(isize::MAX), None);
    }

    #[test]
    fn item_range_shrinks_on_the_last_page() {
        assert_eq!(Position::new(3, 5, 27).item_range(), 10..15);
        assert_eq!(Position::new(6, 5, 27).item_range(), 25..27);
        assert_eq!(Position::new(1, 5, 0).item_range(), 0..0);
    }
}
