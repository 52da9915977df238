#![cfg_attr(docsrs, feature(doc_cfg))]
//! Page arithmetic and HTML pagination links over a counted item source.
//!
//! A [`Pager`] is bound to an [`ItemSource`] and a page size. It asks the source for the total
//! number of items once, then answers which pages exist, which pages surround the current one,
//! which items belong to the current page, and renders a navigation fragment:
//!
//! ```
//! use pagewise::{Pager, RenderOptions};
//!
//! let posts: Vec<u32> = (1..=23).collect();
//! let mut pager = Pager::new(posts, 5)?;
//!
//! pager.set_current_page(2)?;
//! assert_eq!(pager.page_count()?, 5);
//! assert_eq!(pager.previous_page()?, Some(1));
//! assert_eq!(pager.adjacent_pages(3)?, 1..=3);
//!
//! let items: Vec<u32> = pager.current_items()?.copied().collect();
//! assert_eq!(items, vec![6, 7, 8, 9, 10]);
//!
//! let html = pager.render(&RenderOptions::new().with_url("/posts/%d"))?;
//! assert!(html.starts_with(r#"<a href="/posts">&lt;&lt;&lt;</a>"#));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Sources that have to be awaited are served by [`stream::AsyncPager`] behind the `stream`
//! feature.

mod blocking;
mod error;
mod internal;
mod render;

#[cfg(feature = "stream")]
#[cfg_attr(docsrs, doc(cfg(feature = "stream")))]
pub mod stream;

pub use blocking::{ItemSource, Pager};
pub use error::Error;
pub use render::{JumpLabels, RenderOptions, PLACEHOLDER};

#[cfg(test)]
mod test_utils;
