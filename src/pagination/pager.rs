//! Offset pager
//!
//! Drives a [`ListOperation`] one page at a time, following the `offset` of
//! each page's `next` link. Fetches are strictly sequential because a page's
//! successor is only known once it has been decoded.

use super::types::{extract_next_offset, CollectionPage, ListOperation, PagerState};
use crate::error::{Error, Result};
use crate::http::Context;
use futures::Stream;
use tracing::debug;

/// Items of the pages produced by list operation `L`
pub type PageItem<C, L> = <<L as ListOperation<C>>::Page as CollectionPage>::Item;

/// Pages through a list operation
#[derive(Debug)]
pub struct Pager<'a, C: ?Sized, L> {
    client: &'a C,
    options: L,
    state: PagerState,
}

impl<'a, C, L> Pager<'a, C, L>
where
    C: Sync + ?Sized + 'a,
    L: ListOperation<C> + 'a,
{
    /// Create a pager over `options`
    ///
    /// The pager owns offset advancement, so options with an offset already
    /// set are rejected.
    pub fn new(client: &'a C, options: L) -> Result<Self> {
        if options.offset().is_some() {
            return Err(Error::invalid_parameter(
                "offset",
                "the offset is managed by the pager and must not be set",
            ));
        }

        Ok(Self {
            client,
            options,
            state: PagerState::Fresh,
        })
    }

    /// Check if more pages can be fetched
    pub fn has_next(&self) -> bool {
        self.state.has_next()
    }

    /// Current pager state
    pub fn state(&self) -> PagerState {
        self.state
    }

    /// Fetch the next page
    pub async fn get_next(&mut self) -> Result<Vec<PageItem<C, L>>> {
        self.get_next_with_context(Context::background()).await
    }

    /// Fetch the next page within `ctx`
    ///
    /// Fails with [`Error::NoMoreResults`] once the pager is exhausted, without
    /// contacting the server. On failure the state is left unchanged.
    pub async fn get_next_with_context(&mut self, ctx: Context) -> Result<Vec<PageItem<C, L>>> {
        let offset = match self.state {
            PagerState::Exhausted => return Err(Error::NoMoreResults),
            state => state.next_offset(),
        };

        let mut options = self.options.clone();
        options.set_offset(offset);

        let Some(page) = options.fetch_page(self.client, ctx).await? else {
            debug!("Empty list response at offset {:?}, pager exhausted", offset);
            self.state = PagerState::Exhausted;
            return Ok(Vec::new());
        };

        let next_offset = extract_next_offset(page.next())?;
        self.state = match next_offset {
            Some(next) => PagerState::HasMore(next),
            None => PagerState::Exhausted,
        };
        debug!(
            "Fetched page at offset {:?}, next state {:?}",
            offset, self.state
        );

        Ok(page.into_items())
    }

    /// Fetch every remaining page, concatenating items in fetch order
    pub async fn get_all(&mut self) -> Result<Vec<PageItem<C, L>>> {
        self.get_all_with_context(Context::background()).await
    }

    /// Fetch every remaining page within one `ctx`
    ///
    /// Any failed fetch fails the whole call; items gathered so far are dropped.
    pub async fn get_all_with_context(&mut self, ctx: Context) -> Result<Vec<PageItem<C, L>>> {
        ctx.run(async {
            let mut all = Vec::new();
            while self.has_next() {
                all.extend(self.get_next().await?);
            }
            Ok(all)
        })
        .await
    }

    /// Convert into a lazy stream of pages
    ///
    /// The stream ends after the last page or the first error.
    pub fn into_stream(self) -> impl Stream<Item = Result<Vec<PageItem<C, L>>>> + 'a {
        futures::stream::try_unfold(self, |mut pager| async move {
            if !pager.has_next() {
                return Ok(None);
            }
            let items = pager.get_next().await?;
            Ok(Some((items, pager)))
        })
    }
}
