//! Link construction
//!
//! Derives the `next`/`previous` navigation links for a paged list
//! response from the current window and the total result count.

use super::types::{LinkRel, PageLinks, PageWindow};
use crate::error::Result;
use crate::uri::ResolveUri;
use tracing::trace;

/// Build `next`/`previous` links for the current window
///
/// `total_results` is the count of all matching items across every
/// page, as reported by the search that produced the current page.
/// `service_path` is the relative resource path both links point at,
/// e.g. `"applications/"`.
///
/// A relation is absent when the corresponding page does not exist:
/// `next` requires results past the current window, `previous` requires
/// a non-zero offset. The previous window is corrected so its offset is
/// always a valid in-range page start strictly below the current
/// offset, even when the window preceding the current one would fall
/// outside the result set.
pub fn build_pagination_links(
    window: PageWindow,
    total_results: u64,
    service_path: &str,
    resolver: &impl ResolveUri,
) -> Result<PageLinks> {
    let mut links = PageLinks::new();

    if window.end() < total_results {
        links.insert(
            LinkRel::Next,
            page_uri(resolver, service_path, window.end(), window.limit())?,
        );
    }

    if window.offset() > 0 {
        let previous = previous_window(window, total_results);
        trace!(
            offset = previous.offset(),
            limit = previous.limit(),
            total_results,
            "corrected previous window"
        );
        links.insert(
            LinkRel::Previous,
            page_uri(
                resolver,
                service_path,
                u64::from(previous.offset()),
                previous.limit(),
            )?,
        );
    }

    Ok(links)
}

/// Window the `previous` link navigates to
///
/// Steps back from the current offset in `limit`-sized strides until
/// the candidate offset lands inside the result set, yielding the
/// largest stride-derived offset that is both below the current offset
/// and below `total_results`. When a stride would cross zero first, the
/// previous page is the head of the result set: offset 0, sized by the
/// current offset so the two pages stay adjacent.
///
/// Terminates in at most `offset / limit + 1` iterations.
fn previous_window(window: PageWindow, total_results: u64) -> PageWindow {
    debug_assert!(window.offset() > 0);

    let mut candidate = window.offset();
    loop {
        match candidate.checked_sub(window.limit()) {
            Some(stepped) if u64::from(stepped) < total_results => {
                // A full page of size `limit` starts here.
                return PageWindow::new_unchecked(stepped, window.limit());
            }
            Some(stepped) => candidate = stepped,
            None => {
                // No full page fits before the current offset; the
                // previous page is the short head of the result set.
                return PageWindow::new_unchecked(0, window.offset());
            }
        }
    }
}

fn page_uri(
    resolver: &impl ResolveUri,
    service_path: &str,
    offset: u64,
    limit: u32,
) -> Result<String> {
    let uri = resolver.resolve(&format!("{service_path}?offset={offset}&limit={limit}"))?;
    Ok(uri.into())
}
