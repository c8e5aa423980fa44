//! Pagination module
//!
//! Offset-cursor pagination over list operations.
//!
//! # Overview
//!
//! List responses carry `first`/`next`/`previous` links. The `offset` query
//! parameter of the `next` link is the cursor: a [`Pager`] requests it on the
//! following call and stops once a page has no `next` link, or a `next` link
//! without an `offset`.

mod pager;
mod types;

pub use pager::{PageItem, Pager};
pub use types::{extract_next_offset, CollectionPage, ListOperation, PageLink, PagerState};
