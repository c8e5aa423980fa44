//! Pagination types and traits
//!
//! Defines the collection-page abstraction and the offset-link extraction
//! that drives the pager.

use crate::error::{Error, Result};
use crate::http::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::Url;

/// Base used to resolve relative `href` values before reading their query
const RELATIVE_BASE: &str = "http://localhost/";

/// A pagination link (`first`, `next`, `previous`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLink {
    /// Absolute or relative URL of the linked page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl PageLink {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
        }
    }
}

/// One decoded page of a list response
pub trait CollectionPage {
    /// The individual item type within a page
    type Item;

    /// Link to the next page, absent on the last page
    fn next(&self) -> Option<&PageLink>;

    /// Consume the page, returning its items in server order
    fn into_items(self) -> Vec<Self::Item>;

    /// Offset of this page
    fn offset(&self) -> Option<i64> {
        None
    }

    /// Page size
    fn limit(&self) -> Option<i64> {
        None
    }

    /// Total number of items across all pages, when reported
    fn total_count(&self) -> Option<i64> {
        None
    }

    /// Link to the first page
    fn first(&self) -> Option<&PageLink> {
        None
    }

    /// Link to the previous page
    fn previous(&self) -> Option<&PageLink> {
        None
    }
}

/// A list operation that can be driven page by page through client `C`
///
/// Implemented by the options type of every paginated list call.
#[async_trait]
pub trait ListOperation<C: Sync + ?Sized>: Clone + Send + Sync {
    /// Page type returned by one call
    type Page: CollectionPage + Send;

    /// Offset currently set on the options
    fn offset(&self) -> Option<i64>;

    /// Replace the offset
    fn set_offset(&mut self, offset: Option<i64>);

    /// Perform one list call; `None` when the server returned no body
    async fn fetch_page(&self, client: &C, ctx: Context) -> Result<Option<Self::Page>>;
}

/// Position of a pager in its page sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PagerState {
    /// No page fetched yet
    #[default]
    Fresh,
    /// The next page starts at this offset
    HasMore(i64),
    /// No more pages
    Exhausted,
}

impl PagerState {
    /// Check if another fetch is allowed
    pub fn has_next(&self) -> bool {
        !matches!(self, Self::Exhausted)
    }

    /// Offset to request on the next fetch
    pub fn next_offset(&self) -> Option<i64> {
        match self {
            Self::HasMore(offset) => Some(*offset),
            Self::Fresh | Self::Exhausted => None,
        }
    }
}

/// Extract the `offset` query parameter from a `next` link
///
/// Returns `Ok(None)` when the link, its `href`, or the `offset` parameter is
/// absent, which marks the last page. A non-integer offset is an error.
pub fn extract_next_offset(next: Option<&PageLink>) -> Result<Option<i64>> {
    let Some(href) = next.and_then(|link| link.href.as_deref()) else {
        return Ok(None);
    };

    let invalid = |message: String| Error::InvalidPaginationLink {
        href: href.to_string(),
        message,
    };

    let url = match Url::parse(href) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(RELATIVE_BASE)
            .and_then(|base| base.join(href))
            .map_err(|e| invalid(e.to_string()))?,
        Err(e) => return Err(invalid(e.to_string())),
    };

    let Some(value) = url
        .query_pairs()
        .find(|(key, _)| key == "offset")
        .map(|(_, value)| value.into_owned())
    else {
        return Ok(None);
    };

    value
        .parse::<i64>()
        .map(Some)
        .map_err(|e| invalid(format!("invalid offset '{value}': {e}")))
}
