//! Read-only tour of the market endpoints.
//!
//! Fetches the newest page of markets, looks a handful of them up by id with
//! bounded concurrency, then resolves one by slug.
//!
//! Run with tracing enabled:
//! ```sh
//! RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off,h2=off,rustls=off cargo run --example markets
//! ```
//!
//! Optionally log to a file:
//! ```sh
//! LOG_FILE=markets.log RUST_LOG=debug,hyper_util=off,hyper=off,reqwest=off,h2=off,rustls=off cargo run --example markets
//! ```

use std::fs::File;
use std::num::NonZeroUsize;

use manifold_client_sdk::batch::batched_wait_all;
use manifold_client_sdk::v0::types::request::{MarketByIdRequest, MarketBySlugRequest};
use manifold_client_sdk::v0::{Client, Config};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(path) = std::env::var("LOG_FILE") {
        let file = File::create(path)?;
        tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(file)
                    .with_ansi(false),
            )
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }

    let client = Client::new(
        manifold_client_sdk::DEFAULT_HOST,
        Config::builder().page_size(100).build(),
    )?;

    let markets = client.some_markets().await?;
    info!(endpoint = "markets", count = markets.len());

    let open: Vec<_> = markets
        .iter()
        .filter(|market| !market.is_resolved)
        .take(12)
        .collect();

    let batch_size = NonZeroUsize::new(4).unwrap_or(manifold_client_sdk::batch::DEFAULT_BATCH_SIZE);
    let full = batched_wait_all(
        open.iter().map(|market| {
            let client = &client;
            let request = MarketByIdRequest::builder().id(&market.id).build();
            move || async move { client.market(&request).await }
        }),
        batch_size,
    )
    .await;

    match full {
        Ok(full) => {
            for market in &full {
                info!(
                    endpoint = "market",
                    id = %market.market.id,
                    question = %market.market.question,
                    answers = market.answers.len(),
                    probability = ?market.market.probability,
                );
            }
        }
        Err(e) => error!(endpoint = "market", error = %e),
    }

    let Some(slug) = open.first().and_then(|market| market.slug.clone()) else {
        warn!(endpoint = "slug", "no open market with a slug on the first page");
        return Ok(());
    };

    let request = MarketBySlugRequest::builder().slug(slug).build();
    match client.market_by_slug(&request).await {
        Ok(market) => info!(endpoint = "slug", id = %market.id, url = %market.url),
        Err(e) => error!(endpoint = "slug", error = %e),
    }

    Ok(())
}
