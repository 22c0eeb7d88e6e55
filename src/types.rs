//! Re-exported types from external crates for convenience.
//!
//! These types appear throughout the SDK's requests and responses, so they are
//! re-exported here and users don't need to add the dependencies themselves.

/// Date and time types for record timestamps (Manifold sends epoch milliseconds).
pub use chrono::{DateTime, Utc};
/// Arbitrary precision decimal type for mana amounts, shares and probabilities.
pub use rust_decimal::Decimal;
/// Macro for creating [`Decimal`] literals at compile time.
///
/// # Example
/// ```
/// use manifold_client_sdk::types::dec;
/// let amount = dec!(25);
/// ```
pub use rust_decimal_macros::dec;
