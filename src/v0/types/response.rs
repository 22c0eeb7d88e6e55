use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::formats::Flexible;
use serde_with::{TimestampMilliSeconds, serde_as};

use crate::pagination::Record;
use crate::types::Decimal;
use crate::v0::types::{Mechanism, Outcome, OutcomeType};

/// A market as returned by the listing endpoints and `/slug/{slug}`.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct LiteMarket {
    #[builder(into)]
    pub id: String,
    #[builder(into)]
    pub creator_id: String,
    #[builder(into)]
    pub creator_username: String,
    #[builder(into)]
    pub creator_name: String,
    pub creator_avatar_url: Option<String>,
    #[serde_as(as = "TimestampMilliSeconds<i64, Flexible>")]
    pub created_time: DateTime<Utc>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64, Flexible>>")]
    pub close_time: Option<DateTime<Utc>>,
    #[builder(into)]
    pub question: String,
    pub slug: Option<String>,
    #[builder(into)]
    pub url: String,
    pub outcome_type: OutcomeType,
    pub mechanism: Mechanism,
    /// Current YES probability of a binary market.
    pub probability: Option<Decimal>,
    /// Outstanding shares per outcome, keyed by outcome name.
    pub pool: Option<serde_json::Map<String, serde_json::Value>>,
    /// CPMM weighting parameter.
    pub p: Option<Decimal>,
    pub total_liquidity: Option<Decimal>,
    /// Current value of a pseudo-numeric market.
    pub value: Option<Decimal>,
    pub min: Option<Decimal>,
    pub max: Option<Decimal>,
    pub is_log_scale: Option<bool>,
    pub volume: Decimal,
    #[serde(rename = "volume24Hours")]
    pub volume_24_hours: Decimal,
    pub is_resolved: bool,
    pub resolution: Option<String>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64, Flexible>>")]
    pub resolution_time: Option<DateTime<Utc>>,
    pub resolution_probability: Option<Decimal>,
    pub unique_bettor_count: Option<u64>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64, Flexible>>")]
    pub last_updated_time: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64, Flexible>>")]
    pub last_bet_time: Option<DateTime<Utc>>,
    /// Currency the market trades in (`MANA` or `CASH`).
    pub token: Option<String>,
}

impl Record for LiteMarket {
    fn id(&self) -> &str {
        &self.id
    }
}

/// One answer of a multiple-choice or free-response market.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Answer {
    #[builder(into)]
    pub id: String,
    #[builder(into)]
    pub text: String,
    pub probability: Option<Decimal>,
    pub index: Option<u32>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64, Flexible>>")]
    pub created_time: Option<DateTime<Utc>>,
}

/// A market with its description and answers, returned by `/market/{id}`.
///
/// The [`LiteMarket`] fields are flattened in, so unknown fields at the top
/// level are skipped without an unknown-field warning. Unknown fields inside
/// `answers` are still reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct FullMarket {
    #[serde(flatten)]
    pub market: LiteMarket,
    #[serde(default)]
    #[builder(default)]
    pub answers: Vec<Answer>,
    /// Rich-text (TipTap JSON) or plain-string description.
    pub description: Option<serde_json::Value>,
    pub text_description: Option<String>,
    pub cover_image_url: Option<String>,
    #[serde(default)]
    #[builder(default)]
    pub group_slugs: Vec<String>,
}

impl Record for FullMarket {
    fn id(&self) -> &str {
        &self.market.id
    }
}

/// Fees charged on a bet, in mana.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Fees {
    pub creator_fee: Decimal,
    pub platform_fee: Decimal,
    pub liquidity_fee: Decimal,
}

/// A partial match of a limit order.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Fill {
    /// `None` when the fill came from the market maker pool.
    pub matched_bet_id: Option<String>,
    pub amount: Decimal,
    pub shares: Decimal,
    #[serde_as(as = "TimestampMilliSeconds<i64, Flexible>")]
    pub timestamp: DateTime<Utc>,
}

/// A bet or limit order, returned by `/bets`.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Bet {
    #[builder(into)]
    pub id: String,
    #[builder(into)]
    pub contract_id: String,
    pub user_id: Option<String>,
    pub answer_id: Option<String>,
    #[serde_as(as = "TimestampMilliSeconds<i64, Flexible>")]
    pub created_time: DateTime<Utc>,
    pub amount: Decimal,
    pub loan_amount: Option<Decimal>,
    pub outcome: Outcome,
    pub shares: Decimal,
    pub prob_before: Decimal,
    pub prob_after: Decimal,
    pub fees: Option<Fees>,
    pub is_redemption: Option<bool>,
    pub is_cancelled: Option<bool>,
    pub is_filled: Option<bool>,
    pub limit_prob: Option<Decimal>,
    pub order_amount: Option<Decimal>,
    #[serde(default)]
    #[builder(default)]
    pub fills: Vec<Fill>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64, Flexible>>")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Record for Bet {
    fn id(&self) -> &str {
        &self.id
    }
}
