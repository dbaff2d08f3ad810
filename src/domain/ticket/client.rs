//! Tickets sub-client.

use crate::client::CheevosClient;
use crate::domain::ticket::PAGE_COUNT;
use crate::error::ApiError;
use crate::http::Params;
use crate::shared::AchievementSet;

use serde_json::Value;

const ENDPOINT: &str = "API_GetTicketData.php";

pub struct Tickets<'a> {
    pub(crate) client: &'a CheevosClient,
}

impl<'a> Tickets<'a> {
    /// One ticket by ID.
    pub async fn get(&self, ticket_id: u64) -> Result<Value, ApiError> {
        self.client
            .get(ENDPOINT, Params::new().with("i", ticket_id))
            .await
    }

    /// Games with the most open tickets.
    pub async fn most_reported(
        &self,
        count: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Value, ApiError> {
        let params = Params::new()
            .with("f", 1)
            .with_page(count, PAGE_COUNT, offset);
        self.client.get(ENDPOINT, params).await
    }

    /// Newest tickets.
    pub async fn most_recent(
        &self,
        count: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Value, ApiError> {
        let params = Params::new().with_page(count, PAGE_COUNT, offset);
        self.client.get(ENDPOINT, params).await
    }

    /// Ticket counts for a game. `deep` adds per-ticket metadata.
    pub async fn game_stats(
        &self,
        game_id: u64,
        set: Option<AchievementSet>,
        deep: bool,
    ) -> Result<Value, ApiError> {
        let params = Params::new()
            .with("g", game_id)
            .with_opt("f", set.map(|s| s.as_code()))
            .with_opt("d", deep.then_some(1));
        self.client.get(ENDPOINT, params).await
    }

    /// Ticket counts for a developer, by username and optionally ULID.
    pub async fn developer_stats(
        &self,
        user: &str,
        ulid: Option<&str>,
    ) -> Result<Value, ApiError> {
        let params = Params::new().with("u", user).with_opt("i", ulid);
        self.client.get(ENDPOINT, params).await
    }

    /// Ticket counts for one achievement.
    pub async fn achievement_stats(&self, achievement_id: u64) -> Result<Value, ApiError> {
        self.client
            .get(ENDPOINT, Params::new().with("a", achievement_id))
            .await
    }
}
