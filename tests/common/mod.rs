#![allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    reason = "Do not need additional syntax for setting up tests, and https://github.com/rust-lang/rust-clippy/issues/13981"
)]
#![allow(
    unused,
    reason = "Deeply nested uses in sub-modules are falsely flagged as being unused"
)]

use httpmock::MockServer;
use manifold_client_sdk::auth::Credentials;
use manifold_client_sdk::auth::state::Authenticated;
use manifold_client_sdk::v0::{Client, Config};
use serde_json::{Value, json};

pub const API_KEY: &str = "test-key";
pub const AUTHORIZATION: &str = "Authorization";
pub const AUTHORIZATION_VALUE: &str = "Key test-key";

pub const CONTRACT_ID: &str = "5BWk6tLMEMVcpDCs5fPz";
pub const USERNAME: &str = "Austin";

pub type TestClient = Client<Authenticated>;

pub fn client(server: &MockServer) -> anyhow::Result<Client> {
    Ok(Client::new(&server.base_url(), Config::default())?)
}

pub fn authenticated_client(server: &MockServer) -> anyhow::Result<TestClient> {
    Ok(client(server)?.authenticate(Credentials::new(API_KEY)))
}

/// A binary market listing entry with the given `id`.
#[must_use]
pub fn market(id: &str) -> Value {
    json!({
        "id": id,
        "creatorId": "igi2zGXsfxYPgB0DJTXVJVmwCOr2",
        "creatorUsername": USERNAME,
        "creatorName": "Austin Chen",
        "createdTime": 1_653_850_472_294_i64,
        "closeTime": 1_656_500_400_000_i64,
        "question": format!("Question {id}?"),
        "slug": format!("question-{id}"),
        "url": format!("https://manifold.markets/{USERNAME}/question-{id}"),
        "outcomeType": "BINARY",
        "mechanism": "cpmm-1",
        "probability": 0.5,
        "pool": { "YES": 100, "NO": 100 },
        "p": 0.5,
        "totalLiquidity": 100,
        "volume": 0,
        "volume24Hours": 0,
        "isResolved": false
    })
}

/// A filled market-order bet with the given `id` on [`CONTRACT_ID`].
#[must_use]
pub fn bet(id: &str) -> Value {
    json!({
        "id": id,
        "contractId": CONTRACT_ID,
        "userId": "igi2zGXsfxYPgB0DJTXVJVmwCOr2",
        "createdTime": 1_653_850_472_294_i64,
        "amount": 10,
        "outcome": "YES",
        "shares": 19.5,
        "probBefore": 0.5,
        "probAfter": 0.52,
        "fees": { "creatorFee": 0, "platformFee": 0, "liquidityFee": 0 },
        "isFilled": true,
        "isCancelled": false,
        "fills": []
    })
}

/// `count` consecutive records named `{prefix}{start}..`, built with `record`.
#[must_use]
pub fn page(prefix: &str, start: usize, count: usize, record: fn(&str) -> Value) -> Value {
    Value::Array(
        (start..start + count)
            .map(|index| record(&format!("{prefix}{index}")))
            .collect(),
    )
}
