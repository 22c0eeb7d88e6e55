//! Client for the Manifold v0 API.
//!
//! # Example
//!
//! ```no_run
//! use manifold_client_sdk::v0::Client;
//! use manifold_client_sdk::v0::types::request::MarketBySlugRequest;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::default();
//!
//! let request = MarketBySlugRequest::builder()
//!     .slug("will-manifold-ship-an-sdk")
//!     .build();
//! let market = client.market_by_slug(&request).await?;
//! println!("{}: {:?}", market.question, market.probability);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use bon::Builder;
use futures::Stream;
use reqwest::{
    Client as ReqwestClient, Method,
    header::{HeaderMap, HeaderValue},
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
#[cfg(feature = "tracing")]
use tracing::{error, info};
use url::Url;

use super::types::Outcome;
use super::types::request::{
    BetsRequest, MarketByIdRequest, MarketBySlugRequest, MarketsRequest, PlaceBetRequest,
};
use super::types::response::{Bet, FullMarket, LiteMarket};
use crate::auth::Credentials;
use crate::auth::state::{Authenticated, State, Unauthenticated};
use crate::error::Error;
use crate::pagination::{self, DEFAULT_PAGE_SIZE};
use crate::types::Decimal;
use crate::{DEFAULT_HOST, Result, ToQueryParams as _};

/// Configuration for [`Client`]
#[derive(Clone, Debug, Builder)]
#[non_exhaustive]
pub struct Config {
    /// Records requested per page by the paginating helpers
    /// ([`Client::all_markets`], [`Client::all_bets`], ...). Values above
    /// [`pagination::MAX_PAGE_SIZE`] are clamped, zero is rejected when a
    /// listing is requested.
    #[builder(default = DEFAULT_PAGE_SIZE)]
    page_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config::builder().build()
    }
}

impl Config {
    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.page_size
    }
}

#[derive(Debug)]
struct ClientInner<S: State> {
    config: Config,
    /// The current [`State`] of this client
    state: S,
    /// The [`Url`] against which `client` is making requests. Always ends in `/`.
    host: Url,
    /// The inner [`ReqwestClient`] used to make requests to `host`.
    client: ReqwestClient,
}

/// HTTP client for the Manifold v0 API.
///
/// A [`Client`] is either [`Unauthenticated`], which can read markets and bets,
/// or [`Authenticated`] with an API key, which can also place and cancel bets.
///
/// [`Client`] is cheap to clone and thread-safe.
///
/// ```rust,no_run
/// use manifold_client_sdk::auth::Credentials;
/// use manifold_client_sdk::v0::{Client, Config};
///
/// # fn example() -> manifold_client_sdk::Result<()> {
/// // Read-only client against the public API
/// let client = Client::default();
///
/// // Or a custom host and page size, elevated with a key
/// let client = Client::new("https://manifold.markets/api/v0", Config::builder().page_size(500).build())?
///     .authenticate(Credentials::from_env()?);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client<S: State = Unauthenticated> {
    inner: Arc<ClientInner<S>>,
}

impl Default for Client<Unauthenticated> {
    fn default() -> Self {
        Client::new(DEFAULT_HOST, Config::default())
            .expect("Client with default endpoint should succeed")
    }
}

impl Client<Unauthenticated> {
    /// Creates a new unauthenticated client.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client cannot be created.
    pub fn new(host: &str, config: Config) -> Result<Client<Unauthenticated>> {
        let mut headers = HeaderMap::new();

        headers.insert("User-Agent", HeaderValue::from_static("rs_manifold_client"));
        headers.insert("Accept", HeaderValue::from_static("*/*"));
        headers.insert("Connection", HeaderValue::from_static("keep-alive"));
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        let client = ReqwestClient::builder().default_headers(headers).build()?;

        let mut host = Url::parse(host)?;
        if host.cannot_be_a_base() {
            return Err(Error::validation(format!("{host} cannot be used as a base URL")));
        }
        if !host.path().ends_with('/') {
            let path = format!("{}/", host.path());
            host.set_path(&path);
        }

        Ok(Self {
            inner: Arc::new(ClientInner {
                config,
                state: Unauthenticated,
                host,
                client,
            }),
        })
    }

    /// Elevates this client so it can place and cancel bets with `credentials`.
    ///
    /// The key is not verified here. A bad key surfaces as a `401`
    /// [`crate::error::Status`] on the first mutating call.
    #[must_use]
    pub fn authenticate(self, credentials: Credentials) -> Client<Authenticated> {
        Client {
            inner: Arc::new(ClientInner {
                config: self.inner.config.clone(),
                state: Authenticated { credentials },
                host: self.inner.host.clone(),
                client: self.inner.client.clone(),
            }),
        }
    }
}

impl<S: State> Client<S> {
    /// Returns the base URL of the API.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.inner.host
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Joins `segments` onto the host, each one percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.inner.host.clone();
        url.path_segments_mut()
            .map_err(|()| Error::validation("host cannot be used as a base URL"))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    async fn get<Req: Serialize, Res: DeserializeOwned>(
        &self,
        segments: &[&str],
        req: &Req,
        before: Option<&str>,
    ) -> Result<Res> {
        let query = req.query_params(before);
        let request = self
            .inner
            .client
            .request(Method::GET, format!("{}{query}", self.endpoint(segments)?))
            .build()?;

        crate::request(&self.inner.client, request, None).await
    }

    /// Retrieves one page of markets, newest first.
    ///
    /// Pass the `id` of the last market of the previous page as `before` to get
    /// the next, older page.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn markets(
        &self,
        request: &MarketsRequest,
        before: Option<String>,
    ) -> Result<Vec<LiteMarket>> {
        self.get(&["markets"], request, before.as_deref()).await
    }

    /// Retrieves a single market, with answers and description, by its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the market doesn't exist or the request fails.
    pub async fn market(&self, request: &MarketByIdRequest) -> Result<FullMarket> {
        self.get(&["market", request.id.as_str()], request, None).await
    }

    /// Retrieves a single market by its URL slug.
    ///
    /// # Errors
    ///
    /// Returns an error if the market doesn't exist or the request fails.
    pub async fn market_by_slug(&self, request: &MarketBySlugRequest) -> Result<LiteMarket> {
        self.get(&["slug", request.slug.as_str()], request, None).await
    }

    /// Retrieves one page of bets, newest first, filtered by user and/or market.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn bets(&self, request: &BetsRequest, before: Option<String>) -> Result<Vec<Bet>> {
        self.get(&["bets"], request, before.as_deref()).await
    }

    /// Retrieves every market by walking the `before` cursor until a short page.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered; no partial list is returned.
    pub async fn all_markets(&self) -> Result<Vec<LiteMarket>> {
        pagination::collect_all(
            move |limit, before| self.markets_page(limit, before),
            self.inner.config.page_size,
        )
        .await
    }

    /// Retrieves only the newest page of markets. The result is not complete.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn some_markets(&self) -> Result<Vec<LiteMarket>> {
        pagination::first_page(
            move |limit, before| self.markets_page(limit, before),
            self.inner.config.page_size,
        )
        .await
    }

    /// Retrieves every bet placed by `username`.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered; no partial list is returned.
    pub async fn all_bets(&self, username: &str) -> Result<Vec<Bet>> {
        let request = BetsRequest::builder().username(username).build();

        pagination::collect_all(
            |limit, before| self.bets_page(request.clone(), limit, before),
            self.inner.config.page_size,
        )
        .await
    }

    /// Streams every market, fetching pages lazily.
    pub fn stream_markets(&self) -> impl Stream<Item = Result<LiteMarket>> + '_ {
        pagination::stream(
            move |limit, before| self.markets_page(limit, before),
            self.inner.config.page_size,
        )
    }

    /// Streams every bet matching `request`'s filters, fetching pages lazily.
    ///
    /// Any `limit` on `request` is replaced by the configured page size.
    pub fn stream_bets(&self, request: BetsRequest) -> impl Stream<Item = Result<Bet>> + '_ {
        pagination::stream(
            move |limit, before| self.bets_page(request.clone(), limit, before),
            self.inner.config.page_size,
        )
    }

    async fn markets_page(&self, limit: u32, before: Option<String>) -> Result<Vec<LiteMarket>> {
        let request = MarketsRequest::builder().limit(limit).build();
        self.markets(&request, before).await
    }

    async fn bets_page(
        &self,
        mut request: BetsRequest,
        limit: u32,
        before: Option<String>,
    ) -> Result<Vec<Bet>> {
        request.limit = Some(limit);
        self.bets(&request, before).await
    }
}

impl Client<Authenticated> {
    fn headers(&self) -> Result<HeaderMap> {
        self.inner.state.credentials.headers()
    }

    /// Places a market bet, or a limit order when `limit_prob` is set.
    ///
    /// Returns the API's JSON response as-is.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the outcome is not `YES`/`NO` or the amount
    /// is not positive, otherwise any transport, status or decoding error.
    pub async fn place_bet(&self, bet: &PlaceBetRequest) -> Result<Value> {
        if !matches!(bet.outcome, Outcome::Yes | Outcome::No) {
            return Err(Error::validation(format!(
                "bet outcome must be YES or NO, got {:?}",
                bet.outcome
            )));
        }
        if bet.amount <= Decimal::ZERO {
            return Err(Error::validation(format!(
                "bet amount must be positive, got {}",
                bet.amount
            )));
        }

        let request = self
            .inner
            .client
            .request(Method::POST, self.endpoint(&["bet"])?)
            .json(bet)
            .build()?;
        let headers = self.headers()?;

        crate::request(&self.inner.client, request, Some(headers)).await
    }

    /// Places a bet like [`Self::place_bet`], logging instead of returning errors.
    ///
    /// The response is logged at `info` and returned. Any failure is logged at
    /// `error` and turned into `None`, so a failed placement never aborts the
    /// caller. This includes server rejections (any non-2xx status such as an
    /// insufficient balance): their body is logged, not returned.
    pub async fn place_bet_logged(&self, bet: &PlaceBetRequest) -> Option<Value> {
        self.place_bet(bet)
            .await
            .inspect(|response| {
                #[cfg(feature = "tracing")]
                info!(contract_id = %bet.contract_id, response = %response, "bet placed");
                #[cfg(not(feature = "tracing"))]
                let _: &Value = response;
            })
            .inspect_err(|e| {
                #[cfg(feature = "tracing")]
                error!(contract_id = %bet.contract_id, error = %e, "bet placement failed");
                #[cfg(not(feature = "tracing"))]
                let _: &Error = e;
            })
            .ok()
    }

    /// Cancels an open limit order.
    ///
    /// # Errors
    ///
    /// Returns an error if the bet doesn't exist, isn't the caller's, or the
    /// request fails.
    pub async fn cancel_bet(&self, bet_id: &str) -> Result<Value> {
        let request = self
            .inner
            .client
            .request(Method::POST, self.endpoint(&["bet", "cancel", bet_id])?)
            .build()?;
        let headers = self.headers()?;

        crate::request(&self.inner.client, request, Some(headers)).await
    }
}
