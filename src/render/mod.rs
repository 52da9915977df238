//! HTML pagination fragment.
//!
//! The fragment is a flat list of tokens joined with a separator: jump links to the first and the
//! previous page, the visible page numbers, jump links to the next and the last page. The current
//! page is plain text, every other page is an anchor. Omitted pages are marked with an ellipsis.
//!
//! When every page fits into `2 * around + 1` slots all of them are shown. Otherwise only the
//! pages at most `around` away from the current one are.
//!
//! Anchors are built with maud, so URLs and jump labels are escaped. The separator and the
//! ellipsis are raw HTML.

mod options;

pub use options::{JumpLabels, RenderOptions, PLACEHOLDER};

use crate::internal::window;
use maud::{html, Markup, PreEscaped};
use std::ops::RangeInclusive;

/// Renders the fragment for a pager positioned on `current` of `page_count` pages.
pub(crate) fn render(current: usize, page_count: usize, options: &RenderOptions) -> String {
    tracing::trace!(
        current,
        page_count,
        around = options.around,
        "rendering pagination links"
    );

    if page_count <= 1 {
        return current.to_string();
    }

    let around = options.around;
    let pages = visible_pages(current, page_count, around);
    let jumps = jumps_visible(current, page_count, around);
    let labels = &options.labels;

    let mut tokens: Vec<Markup> = Vec::new();

    if jumps && current > 1 {
        tokens.push(anchor(options, 1, &labels.first));
        tokens.push(anchor(options, current - 1, &labels.previous));
    }

    if *pages.start() > 1 {
        tokens.push(PreEscaped(options.ellipsis.clone()));
    }

    for page in pages.clone() {
        if page == current {
            tokens.push(html! { (page) });
        } else {
            tokens.push(anchor(options, page, &page.to_string()));
        }
    }

    // A trailing gap sticks to the last page number.
    if *pages.end() < page_count {
        if let Some(PreEscaped(last)) = tokens.last_mut() {
            last.push_str(&options.ellipsis);
        }
    }

    if jumps && current < page_count {
        tokens.push(anchor(options, current + 1, &labels.next));
        tokens.push(anchor(options, page_count, &labels.last));
    }

    html! {
        @for (index, token) in tokens.iter().enumerate() {
            @if index > 0 {
                (PreEscaped(&options.separator))
            }
            (token)
        }
    }
    .into_string()
}

fn visible_pages(current: usize, page_count: usize, around: usize) -> RangeInclusive<usize> {
    let slots = around.saturating_mul(2).saturating_add(1);

    if page_count <= slots {
        window::adjacent(current, slots, page_count)
    } else {
        window::around(current, around, page_count)
    }
}

/// Jump links are redundant while every page is at most `around` away from the current one.
fn jumps_visible(current: usize, page_count: usize, around: usize) -> bool {
    let before = current - 1;
    let after = page_count - current;

    before > around || after > around
}

fn anchor(options: &RenderOptions, page: usize, label: &str) -> Markup {
    let url = options.page_url(page);

    html! {
        a href=(&*url) { (label) }
    }
}
