//! API-key authentication for mutating endpoints.
//!
//! Manifold authenticates writes with a static header,
//! `Authorization: Key <api key>`. The key is held in a [`SecretString`] so it
//! never shows up in `Debug` output, and it is supplied explicitly to
//! [`crate::v0::Client::authenticate`] rather than read from a global.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
/// Secret string types that redact values in debug output for security.
pub use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::Result;
use crate::error::Error;

/// Environment variable conventionally holding a Manifold API key.
pub const API_KEY_VAR: &str = "MANIFOLD_API_KEY";

/// The credential used by [`state::Authenticated`] clients to authorize mutating requests.
#[derive(Clone, Debug, Deserialize)]
pub struct Credentials {
    #[serde(alias = "apiKey")]
    pub(crate) key: SecretString,
}

impl Credentials {
    #[must_use]
    pub fn new<K: Into<String>>(key: K) -> Self {
        Self {
            key: SecretString::from(key.into()),
        }
    }

    /// Reads the key from [`API_KEY_VAR`].
    ///
    /// Fails immediately when the variable is unset or not unicode, so a
    /// missing key is reported before a client is authenticated.
    ///
    /// The key is not checked against the API here; an invalid key surfaces
    /// as a `401` on the first mutating call.
    pub fn from_env() -> Result<Self> {
        let key = std::env::var(API_KEY_VAR)
            .map_err(|e| Error::validation(format!("{API_KEY_VAR} is not usable: {e}")))?;

        Ok(Self::new(key))
    }

    /// Returns the API key.
    #[must_use]
    pub fn key(&self) -> &SecretString {
        &self.key
    }

    /// Builds the headers attached to every authenticated request.
    pub(crate) fn headers(&self) -> Result<HeaderMap> {
        let mut value = HeaderValue::from_str(&format!("Key {}", self.key.expose_secret()))?;
        value.set_sensitive(true);

        let mut map = HeaderMap::new();
        map.insert(AUTHORIZATION, value);

        Ok(map)
    }
}

/// Each client exists in one state at a time, i.e. [`state::Unauthenticated`] or
/// [`state::Authenticated`]. Only authenticated clients expose bet placement and
/// cancellation.
pub mod state {
    use crate::auth::Credentials;

    /// The initial state of the client
    #[non_exhaustive]
    #[derive(Clone, Debug)]
    pub struct Unauthenticated;

    /// The elevated state of the client, carrying the [`Credentials`] used for
    /// the `Authorization` header.
    #[non_exhaustive]
    #[derive(Clone, Debug)]
    pub struct Authenticated {
        pub(crate) credentials: Credentials,
    }

    /// The client state can only be [`Unauthenticated`] or [`Authenticated`].
    pub trait State: sealed::Sealed {}

    impl State for Unauthenticated {}
    impl sealed::Sealed for Unauthenticated {}

    impl State for Authenticated {}
    impl sealed::Sealed for Authenticated {}

    mod sealed {
        pub trait Sealed {}
    }
}
