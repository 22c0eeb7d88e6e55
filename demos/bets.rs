//! Bet history and order management.
//!
//! Streams a user's bets, then, when `MANIFOLD_API_KEY` and `CONTRACT_ID` are
//! set, places a small limit order far from the market price and cancels it.
//!
//! Run with tracing enabled:
//! ```sh
//! MANIFOLD_USERNAME=Austin RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off,h2=off,rustls=off cargo run --example bets
//! ```

use futures::StreamExt as _;
use manifold_client_sdk::auth::Credentials;
use manifold_client_sdk::types::dec;
use manifold_client_sdk::v0::Client;
use manifold_client_sdk::v0::types::Outcome;
use manifold_client_sdk::v0::types::request::{BetsRequest, PlaceBetRequest};
use tracing::{debug, error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let client = Client::default();
    let username = std::env::var("MANIFOLD_USERNAME").unwrap_or_else(|_| "Austin".to_owned());

    let bets = client.all_bets(&username).await?;
    let cancelled = bets
        .iter()
        .filter(|bet| bet.is_cancelled == Some(true))
        .count();
    info!(endpoint = "bets", username = %username, count = bets.len(), cancelled);

    // The stream borrows `client` until the end of this block
    {
        let request = BetsRequest::builder()
            .username(username.as_str())
            .build();
        let stream = client.stream_bets(request).take(25);
        futures::pin_mut!(stream);
        while let Some(bet) = stream.next().await {
            match bet {
                Ok(bet) => {
                    debug!(id = %bet.id, contract_id = %bet.contract_id, amount = %bet.amount);
                }
                Err(e) => {
                    error!(endpoint = "bets", error = %e);
                    break;
                }
            }
        }
    }

    let (Ok(credentials), Ok(contract_id)) = (Credentials::from_env(), std::env::var("CONTRACT_ID"))
    else {
        warn!("MANIFOLD_API_KEY or CONTRACT_ID unset, skipping order placement");
        return Ok(());
    };
    let client = client.authenticate(credentials);

    let order = PlaceBetRequest::builder()
        .contract_id(contract_id)
        .outcome(Outcome::Yes)
        .amount(dec!(1))
        .limit_prob(dec!(0.01))
        .build();

    let Some(response) = client.place_bet_logged(&order).await else {
        return Ok(());
    };

    match response.get("betId").and_then(|id| id.as_str()) {
        Some(bet_id) => match client.cancel_bet(bet_id).await {
            Ok(cancelled) => info!(endpoint = "cancel", bet_id, response = %cancelled),
            Err(e) => error!(endpoint = "cancel", bet_id, error = %e),
        },
        None => warn!(response = %response, "placement response carried no bet id"),
    }

    Ok(())
}
