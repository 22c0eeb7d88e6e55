//! Types for the Manifold v0 API.
//!
//! - **Common types**: enums shared by requests and responses.
//! - **Request types**: builder-pattern structs for each endpoint
//!   (e.g. [`request::BetsRequest`], [`request::PlaceBetRequest`]).
//! - **Response types**: the records the API returns
//!   (e.g. [`response::LiteMarket`], [`response::Bet`]).
//!
//! # Request Building
//!
//! All request types use the builder pattern via the [`bon`](https://docs.rs/bon) crate:
//!
//! ```
//! use manifold_client_sdk::types::dec;
//! use manifold_client_sdk::v0::types::Outcome;
//! use manifold_client_sdk::v0::types::request::{BetsRequest, PlaceBetRequest};
//!
//! let bets = BetsRequest::builder().username("Austin").limit(100).build();
//!
//! let bet = PlaceBetRequest::builder()
//!     .contract_id("5BWk6tLMEMVcpDCs5fPz")
//!     .outcome(Outcome::Yes)
//!     .amount(dec!(10))
//!     .limit_prob(dec!(0.4))
//!     .build();
//! ```

use serde::{Deserialize, Serialize};

pub mod request;
pub mod response;

/// The side of a binary bet.
///
/// Bets on multiple-choice markets carry an answer id as their outcome, which
/// decodes into [`Outcome::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
#[non_exhaustive]
pub enum Outcome {
    Yes,
    No,
    /// Any other outcome string (answer ids, legacy values).
    #[serde(untagged)]
    Unknown(String),
}

/// What kind of question a market asks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum OutcomeType {
    Binary,
    FreeResponse,
    MultipleChoice,
    PseudoNumeric,
    Numeric,
    Number,
    Stonk,
    BountiedQuestion,
    Poll,
    QuadraticFunding,
    Cert,
    /// Unknown outcome type from the API (captures the raw value for debugging).
    #[serde(untagged)]
    Unknown(String),
}

/// The pricing mechanism behind a market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[non_exhaustive]
pub enum Mechanism {
    /// Constant-product market maker on a single binary pool.
    #[serde(rename = "cpmm-1")]
    #[strum(serialize = "cpmm-1")]
    Cpmm1,
    /// One constant-product pool per answer.
    #[serde(rename = "cpmm-multi-1")]
    #[strum(serialize = "cpmm-multi-1")]
    CpmmMulti1,
    /// Legacy dynamic parimutuel.
    #[serde(rename = "dpm-2")]
    #[strum(serialize = "dpm-2")]
    Dpm2,
    #[serde(rename = "none")]
    #[strum(serialize = "none")]
    None,
    /// Unknown mechanism from the API (captures the raw value for debugging).
    #[serde(untagged)]
    Unknown(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_round_trips_known_and_unknown() {
        let yes: Outcome = serde_json::from_str(r#""YES""#).expect("decode");
        let answer: Outcome = serde_json::from_str(r#""a1b2c3""#).expect("decode");

        assert_eq!(yes, Outcome::Yes);
        assert_eq!(answer, Outcome::Unknown("a1b2c3".to_owned()));
        assert_eq!(serde_json::to_string(&Outcome::No).expect("encode"), r#""NO""#);
        assert_eq!(Outcome::Yes.to_string(), "YES");
    }

    #[test]
    fn outcome_type_uses_screaming_snake_case() {
        let kind: OutcomeType = serde_json::from_str(r#""PSEUDO_NUMERIC""#).expect("decode");
        let new_kind: OutcomeType = serde_json::from_str(r#""DATE""#).expect("decode");

        assert_eq!(kind, OutcomeType::PseudoNumeric);
        assert_eq!(new_kind, OutcomeType::Unknown("DATE".to_owned()));
        assert_eq!(OutcomeType::FreeResponse.to_string(), "FREE_RESPONSE");
    }

    #[test]
    fn mechanism_uses_wire_names() {
        let mechanism: Mechanism = serde_json::from_str(r#""cpmm-multi-1""#).expect("decode");

        assert_eq!(mechanism, Mechanism::CpmmMulti1);
        assert_eq!(Mechanism::Cpmm1.to_string(), "cpmm-1");
    }
}
