//! Windows of page numbers around the current page.
//!
//! Both functions expect `1 <= current <= page_count`.
use std::ops::RangeInclusive;

#[allow(clippy::reversed_empty_ranges)]
const EMPTY: RangeInclusive<usize> = 1..=0;

/// A run of at most `limit` pages as centred on `current` as the bounds `[1, page_count]` allow.
/// The window is shifted rather than shrunk when it hits a bound, so it only gets shorter than
/// `limit` when there are fewer pages than that.
pub fn adjacent(current: usize, limit: usize, page_count: usize) -> RangeInclusive<usize> {
    if limit == 0 {
        return EMPTY;
    }

    let limit = limit.min(page_count);
    let start = current
        .saturating_sub(limit / 2)
        .max(1)
        .min(page_count - limit + 1);

    start..=start + limit - 1
}

/// Pages at most `radius` away from `current`, clipped to `[1, page_count]` without shifting.
pub fn around(current: usize, radius: usize, page_count: usize) -> RangeInclusive<usize> {
    let start = current.saturating_sub(radius).max(1);
    let end = current.saturating_add(radius).min(page_count);

    start..=end
}
