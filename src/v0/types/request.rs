#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::types::Decimal;
use crate::v0::types::Outcome;

/// Query for `GET /markets`. The `before` cursor is passed separately.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[non_exhaustive]
pub struct MarketsRequest {
    /// Records per page, at most [`crate::pagination::MAX_PAGE_SIZE`].
    pub limit: Option<u32>,
}

/// `GET /market/{id}`
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct MarketByIdRequest {
    #[serde(skip_serializing)]
    #[builder(into)]
    pub id: String,
}

/// `GET /slug/{slug}`
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct MarketBySlugRequest {
    #[serde(skip_serializing)]
    #[builder(into)]
    pub slug: String,
}

/// Query for `GET /bets`. Every filter is optional; the `before` cursor is
/// passed separately.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct BetsRequest {
    #[builder(into)]
    pub username: Option<String>,
    #[builder(into)]
    pub contract_id: Option<String>,
    #[builder(into)]
    pub contract_slug: Option<String>,
    pub limit: Option<u32>,
}

/// Body for `POST /bet`.
///
/// Amounts and probabilities go over the wire as JSON numbers.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct PlaceBetRequest {
    #[builder(into)]
    pub contract_id: String,
    /// Must be [`Outcome::Yes`] or [`Outcome::No`].
    pub outcome: Outcome,
    /// Mana to spend.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Turns the bet into a limit order filled only up to this probability.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub limit_prob: Option<Decimal>,
}
