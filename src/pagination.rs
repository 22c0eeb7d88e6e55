//! Cursor pagination over Manifold's `before`-token listings.
//!
//! Listing endpoints return records newest first. Passing the `id` of the last
//! record received as `before` returns the next, older page. The API gives no
//! total count or "has more" flag, so a page shorter than the requested size is
//! the only exhaustion signal.
//!
//! Three modes share one algorithm:
//!
//! - [`collect_all`] loops until exhaustion and returns every record.
//! - [`first_page`] performs a single round. The result may be incomplete.
//! - [`stream`] yields records as pages arrive.
//!
//! Each takes a `fetch_page(limit, before)` closure, so the same loop drives
//! markets, bets, or a simulated backend in tests.

use std::future::Future;

use async_stream::try_stream;
use futures::Stream;
#[cfg(feature = "tracing")]
use tracing::{debug, warn};

use crate::Result;
use crate::error::Error;

/// Page size requested when the caller doesn't pick one.
pub const DEFAULT_PAGE_SIZE: u32 = 1000;

/// Largest `limit` Manifold accepts on its listing endpoints.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// A listing entry that can act as a pagination cursor.
pub trait Record {
    /// The opaque identifier passed back as `before` to fetch older records.
    fn id(&self) -> &str;
}

fn checked_page_size(page_size: u32) -> Result<u32> {
    if page_size == 0 {
        return Err(Error::validation(
            "page size must be greater than zero, a zero-sized page never signals exhaustion",
        ));
    }

    if page_size > MAX_PAGE_SIZE {
        #[cfg(feature = "tracing")]
        warn!(
            "Supplied {page_size} page size, Manifold only allows for maximum {MAX_PAGE_SIZE} records per call, defaulting to {MAX_PAGE_SIZE}"
        );

        return Ok(MAX_PAGE_SIZE);
    }

    Ok(page_size)
}

/// Whether another page should be requested after receiving `count` records.
fn has_more(count: usize, page_size: u32) -> bool {
    // An empty page has no last id to advance the cursor with.
    count > 0 && u32::try_from(count).is_ok_and(|count| count >= page_size)
}

/// Fetches every record reachable by advancing the `before` cursor.
///
/// Records are returned in server order: the concatenation of each page in the
/// order the pages were fetched. Any fetch error aborts the walk and is returned;
/// records gathered before the failure are dropped.
///
/// # Errors
///
/// Returns a validation error if `page_size` is zero, or the first error
/// returned by `fetch_page`.
///
/// # Example
///
/// ```no_run
/// use manifold_client_sdk::pagination::{self, DEFAULT_PAGE_SIZE};
/// use manifold_client_sdk::v0::Client;
/// use manifold_client_sdk::v0::types::request::MarketsRequest;
///
/// # async fn example() -> manifold_client_sdk::Result<()> {
/// let client = Client::default();
///
/// let markets = pagination::collect_all(
///     |limit, before| {
///         let request = MarketsRequest::builder().limit(limit).build();
///         let client = &client;
///         async move { client.markets(&request, before).await }
///     },
///     DEFAULT_PAGE_SIZE,
/// )
/// .await?;
///
/// println!("{} markets", markets.len());
/// # Ok(())
/// # }
/// ```
pub async fn collect_all<R, Fetch, Fut>(mut fetch_page: Fetch, page_size: u32) -> Result<Vec<R>>
where
    R: Record,
    Fetch: FnMut(u32, Option<String>) -> Fut,
    Fut: Future<Output = Result<Vec<R>>>,
{
    let page_size = checked_page_size(page_size)?;

    let mut records: Vec<R> = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let page = fetch_page(page_size, cursor.take()).await?;
        let count = page.len();

        records.extend(page);

        if count > 0 {
            cursor = records.last().map(|record| record.id().to_owned());
        }

        #[cfg(feature = "tracing")]
        debug!(
            loaded = records.len(),
            page = count,
            before = cursor.as_deref().unwrap_or_default(),
            "loaded page"
        );

        if !has_more(count, page_size) {
            break;
        }
    }

    Ok(records)
}

/// Fetches only the newest page.
///
/// This never checks for exhaustion, so a full page does not mean there is
/// nothing older. Use it when the most recent records are enough.
///
/// # Errors
///
/// Returns a validation error if `page_size` is zero, or the error returned by
/// `fetch_page`.
pub async fn first_page<R, Fetch, Fut>(fetch_page: Fetch, page_size: u32) -> Result<Vec<R>>
where
    R: Record,
    Fetch: FnOnce(u32, Option<String>) -> Fut,
    Fut: Future<Output = Result<Vec<R>>>,
{
    let page_size = checked_page_size(page_size)?;
    let records = fetch_page(page_size, None).await?;

    #[cfg(feature = "tracing")]
    debug!(
        loaded = records.len(),
        before = records.last().map(Record::id).unwrap_or_default(),
        "loaded first page"
    );

    Ok(records)
}

/// Returns a stream of records using `before`-cursor pagination.
///
/// The stream repeatedly invokes `fetch_page` with the page size and the id of
/// the last record yielded so far, flattening each page into individual items.
/// It ends after a page shorter than `page_size` (including an empty one), or
/// after yielding the first error.
///
/// # Example
///
/// ```no_run
/// use futures::StreamExt as _;
/// use manifold_client_sdk::pagination;
/// use manifold_client_sdk::v0::Client;
/// use manifold_client_sdk::v0::types::request::BetsRequest;
/// use tokio::pin;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::default();
///
/// let stream = pagination::stream(
///     |limit, before| {
///         let request = BetsRequest::builder().username("Austin").limit(limit).build();
///         let client = &client;
///         async move { client.bets(&request, before).await }
///     },
///     500,
/// );
///
/// pin!(stream);
///
/// while let Some(bet) = stream.next().await {
///     println!("{}", bet?.id);
/// }
/// # Ok(())
/// # }
/// ```
pub fn stream<'fetch, R, Fetch, Fut>(
    mut fetch_page: Fetch,
    page_size: u32,
) -> impl Stream<Item = Result<R>> + 'fetch
where
    R: Record + 'fetch,
    Fetch: FnMut(u32, Option<String>) -> Fut + 'fetch,
    Fut: Future<Output = Result<Vec<R>>> + 'fetch,
{
    try_stream! {
        let page_size = checked_page_size(page_size)?;
        let mut cursor: Option<String> = None;

        loop {
            let page = fetch_page(page_size, cursor.take()).await?;
            let count = page.len();

            cursor = page.last().map(|record| record.id().to_owned());

            for record in page {
                yield record;
            }

            if !has_more(count, page_size) {
                break;
            }
        }
    }
}
