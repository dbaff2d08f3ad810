//! Leaderboards sub-client.

use crate::client::CheevosClient;
use crate::domain::leaderboard::PAGE_COUNT;
use crate::error::ApiError;
use crate::http::Params;

use serde_json::Value;

pub struct Leaderboards<'a> {
    pub(crate) client: &'a CheevosClient,
}

impl<'a> Leaderboards<'a> {
    /// Leaderboards defined for a game.
    pub async fn for_game(
        &self,
        game_id: u64,
        count: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Value, ApiError> {
        let params = Params::new()
            .with("i", game_id)
            .with_page(count, PAGE_COUNT, offset);
        self.client.get("API_GetGameLeaderboards.php", params).await
    }

    /// Ranked entries of one leaderboard.
    pub async fn entries(
        &self,
        leaderboard_id: u64,
        count: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Value, ApiError> {
        let params = Params::new()
            .with("i", leaderboard_id)
            .with_page(count, PAGE_COUNT, offset);
        self.client
            .get("API_GetLeaderboardEntries.php", params)
            .await
    }

    /// A user's entries on every leaderboard of a game.
    pub async fn user_entries(
        &self,
        game_id: u64,
        user: &str,
        count: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Value, ApiError> {
        let params = Params::new()
            .with("i", game_id)
            .with("u", user)
            .with_page(count, PAGE_COUNT, offset);
        self.client
            .get("API_GetUserGameLeaderboards.php", params)
            .await
    }
}
