//! Manifold v0 API client and types.
//!
//! This module provides a client for the public Manifold Markets HTTP API:
//! reading markets and bets, and placing or cancelling bets with an API key.
//!
//! ## Available Endpoints
//!
//! | Endpoint | Description |
//! |----------|-------------|
//! | `GET /markets` | List markets, newest first, paged with `before` |
//! | `GET /market/{id}` | Get a market with answers and description |
//! | `GET /slug/{slug}` | Get a market by slug |
//! | `GET /bets` | List bets by user and/or market, paged with `before` |
//! | `POST /bet` | Place a bet or limit order (authenticated) |
//! | `POST /bet/cancel/{id}` | Cancel a limit order (authenticated) |
//!
//! # Example
//!
//! ```no_run
//! use manifold_client_sdk::v0::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::default();
//!
//! // Walks every page of `/markets`
//! let markets = client.all_markets().await?;
//!
//! for market in markets.iter().filter(|market| !market.is_resolved) {
//!     println!("{}: {:?}", market.question, market.probability);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # API Base URL
//!
//! The default API endpoint is `https://manifold.markets/api/v0/`.

pub mod client;
pub mod types;

pub use client::{Client, Config};
