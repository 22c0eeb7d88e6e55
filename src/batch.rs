//! Bounded fan-out of independent asynchronous calls.
//!
//! [`batched_wait_all`] runs task factories in sequential groups of at most
//! `batch_size`. Every task in a group is started, then the whole group is
//! awaited before the next group begins. This caps the number of requests in
//! flight against the API without a worker pool.
//!
//! ```no_run
//! use manifold_client_sdk::batch::{DEFAULT_BATCH_SIZE, batched_wait_all};
//! use manifold_client_sdk::v0::Client;
//! use manifold_client_sdk::v0::types::request::MarketByIdRequest;
//!
//! # async fn example() -> manifold_client_sdk::Result<()> {
//! let client = Client::default();
//! let ids = ["id-1", "id-2", "id-3"];
//!
//! let markets = batched_wait_all(
//!     ids.iter().map(|id| {
//!         let client = &client;
//!         let request = MarketByIdRequest::builder().id(*id).build();
//!         move || async move { client.market(&request).await }
//!     }),
//!     DEFAULT_BATCH_SIZE,
//! )
//! .await?;
//!
//! assert_eq!(markets.len(), ids.len());
//! # Ok(())
//! # }
//! ```

use std::future::Future;
use std::num::NonZeroUsize;

use futures::future::join_all;
#[cfg(feature = "tracing")]
use tracing::debug;

/// Number of tasks allowed in flight at once when the caller doesn't pick one.
pub const DEFAULT_BATCH_SIZE: NonZeroUsize = NonZeroUsize::new(10).expect("ten is non-zero");

/// Runs `factories` in groups of `batch_size`, returning results in input order.
///
/// Within a group, factories are invoked one after another (each hands back its
/// future before the next is invoked) and then awaited together. The group is a
/// join barrier: every task settles before its outcome is inspected, and the
/// next group is only started when all of them succeeded.
///
/// Each factory is invoked at most once. Factories belonging to a group after
/// a failed one are never invoked.
///
/// # Errors
///
/// Returns the error of the lowest-indexed failed task in the first group that
/// contains a failure. Results of successful tasks are discarded in that case.
pub async fn batched_wait_all<I, F, Fut, T, E>(
    factories: I,
    batch_size: NonZeroUsize,
) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = F>,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut factories = factories.into_iter();
    let mut results = Vec::with_capacity(factories.size_hint().0);
    #[cfg(feature = "tracing")]
    let mut batch_index = 0_usize;

    loop {
        let pending: Vec<Fut> = factories
            .by_ref()
            .take(batch_size.get())
            .map(|factory| factory())
            .collect();

        if pending.is_empty() {
            break;
        }

        #[cfg(feature = "tracing")]
        debug!(batch = batch_index, tasks = pending.len(), "awaiting batch");

        for outcome in join_all(pending).await {
            results.push(outcome?);
        }

        #[cfg(feature = "tracing")]
        {
            batch_index += 1;
        }
    }

    Ok(results)
}
