//! Authentication: account credentials for the web API.
//!
//! ## Security Model
//!
//! - The API key is sent as the `y` query parameter on every request. That is
//!   the only place it is ever written.
//! - The key is NEVER exposed via public API; there is no `.api_key()` accessor on the
//!   client, and `Debug` prints `<redacted>`.
//! - Transport errors are stripped of their URL before they reach the caller.

use serde::Deserialize;

/// Environment variable read by [`Credentials::from_env`] for the account name.
pub const ENV_USERNAME: &str = "RA_USERNAME";

/// Environment variable read by [`Credentials::from_env`] for the API key.
pub const ENV_API_KEY: &str = "RA_API_KEY";

/// Account identifier plus web API key.
///
/// Immutable once built. Deserializable so it can sit inside a caller's own
/// config file.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    #[serde(alias = "username")]
    account_id: String,
    api_key: String,
}

impl Credentials {
    pub fn new(account_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            api_key: api_key.into(),
        }
    }

    /// Read credentials from `RA_USERNAME` and `RA_API_KEY`.
    ///
    /// Returns `None` if either variable is unset or empty.
    pub fn from_env() -> Option<Self> {
        let account_id = std::env::var(ENV_USERNAME).ok().filter(|v| !v.is_empty())?;
        let api_key = std::env::var(ENV_API_KEY).ok().filter(|v| !v.is_empty())?;
        Some(Self::new(account_id, api_key))
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("account_id", &self.account_id)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
