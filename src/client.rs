//! High-level client: `CheevosClient` with nested sub-client accessors.
//!
//! Each resource group has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the shared transport and the accessor
//! methods. Sub-clients borrow the client and never mutate it.

use crate::auth::Credentials;
use crate::domain::achievement::client::Achievements;
use crate::domain::comment::client::Comments;
use crate::domain::feed::client::Feed;
use crate::domain::game::client::Games;
use crate::domain::leaderboard::client::Leaderboards;
use crate::domain::system::client::Systems;
use crate::domain::ticket::client::Tickets;
use crate::domain::user::client::Users;
use crate::error::ApiError;
use crate::http::{CheevosHttp, Params};
use crate::network::{DEFAULT_API_URL, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};

use serde_json::Value;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::achievement::client::Achievements as AchievementClient;
pub use crate::domain::comment::client::Comments as CommentClient;
pub use crate::domain::feed::client::Feed as FeedClient;
pub use crate::domain::game::client::Games as GameClient;
pub use crate::domain::leaderboard::client::Leaderboards as LeaderboardClient;
pub use crate::domain::system::client::Systems as SystemClient;
pub use crate::domain::ticket::client::Tickets as TicketClient;
pub use crate::domain::user::client::Users as UserClient;

/// The primary entry point for the SDK.
///
/// Provides nested sub-client accessors for each resource group:
/// `client.user()`, `client.game()`, etc.
#[derive(Debug, Clone)]
pub struct CheevosClient {
    pub(crate) http: CheevosHttp,
}

impl CheevosClient {
    /// Client with default settings against the public API.
    pub fn new(
        account_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, ApiError> {
        Self::builder(Credentials::new(account_id, api_key)).build()
    }

    pub fn builder(credentials: Credentials) -> CheevosClientBuilder {
        CheevosClientBuilder::new(credentials)
    }

    pub fn account_id(&self) -> &str {
        self.http.credentials().account_id()
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Call any endpoint by name. The API key is added automatically.
    ///
    /// The sub-clients are thin wrappers over this; use it directly for
    /// endpoints they do not cover.
    pub async fn get(&self, endpoint: &str, params: Params) -> Result<Value, ApiError> {
        self.http.get(endpoint, params).await
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn user(&self) -> Users<'_> {
        Users { client: self }
    }

    pub fn game(&self) -> Games<'_> {
        Games { client: self }
    }

    pub fn system(&self) -> Systems<'_> {
        Systems { client: self }
    }

    pub fn leaderboard(&self) -> Leaderboards<'_> {
        Leaderboards { client: self }
    }

    pub fn achievement(&self) -> Achievements<'_> {
        Achievements { client: self }
    }

    pub fn comment(&self) -> Comments<'_> {
        Comments { client: self }
    }

    pub fn feed(&self) -> Feed<'_> {
        Feed { client: self }
    }

    pub fn ticket(&self) -> Tickets<'_> {
        Tickets { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
pub struct CheevosClientBuilder {
    credentials: Credentials,
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl CheevosClientBuilder {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Point the client somewhere else, e.g. a local mock server.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn build(self) -> Result<CheevosClient, ApiError> {
        if self.base_url.trim().is_empty() {
            return Err(ApiError::invalid("base URL cannot be empty"));
        }

        Ok(CheevosClient {
            http: CheevosHttp::new(
                &self.base_url,
                self.credentials,
                self.timeout,
                &self.user_agent,
            )?,
        })
    }
}
