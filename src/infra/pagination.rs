use futures::future::try_join_all;
use std::future::Future;

use crate::domain::models::SearchResponse;

/// Page numbers still to fetch after page 0, `1..totalPages`.
pub fn remaining_pages<R: SearchResponse>(first: &R) -> Vec<u32> {
    match first.page() {
        Some(page) if !page.last_page => (1..page.total_pages).collect(),
        _ => Vec::new(),
    }
}

/// Merges every page of a search into one collection.
///
/// Remaining pages are requested concurrently and joined in page-number
/// order, whatever order the responses arrive in. One failed page fails
/// the whole merge.
pub async fn merge_pages<R, F, Fut, E>(first: R, fetch_page: F) -> Result<Vec<R::Item>, E>
where
    R: SearchResponse,
    F: Fn(u32) -> Fut,
    Fut: Future<Output = Result<R, E>>,
{
    let pages = remaining_pages(&first);
    let mut items = first.into_items();
    if pages.is_empty() {
        return Ok(items);
    }

    tracing::debug!(pages = pages.len(), "fetching remaining pages");
    let rest = try_join_all(pages.into_iter().map(&fetch_page)).await?;
    for page in rest {
        items.extend(page.into_items());
    }
    Ok(items)
}
