//! Games sub-client: game metadata and achievement statistics.

use crate::client::CheevosClient;
use crate::domain::game::Ranking;
use crate::error::ApiError;
use crate::http::Params;
use crate::shared::AchievementSet;

use serde_json::Value;

/// Sub-client for game operations.
pub struct Games<'a> {
    pub(crate) client: &'a CheevosClient,
}

impl<'a> Games<'a> {
    /// Basic game metadata.
    pub async fn summary(&self, game_id: u64) -> Result<Value, ApiError> {
        self.client
            .get("API_GetGame.php", Params::new().with("i", game_id))
            .await
    }

    /// Game metadata with every achievement of the chosen set
    /// (default: official).
    pub async fn extended_details(
        &self,
        game_id: u64,
        set: Option<AchievementSet>,
    ) -> Result<Value, ApiError> {
        let params = Params::new()
            .with("i", game_id)
            .with("f", set.unwrap_or_default().as_code());
        self.client.get("API_GetGameExtended.php", params).await
    }

    /// Supported ROM hashes.
    pub async fn hashes(&self, game_id: u64) -> Result<Value, ApiError> {
        self.client
            .get("API_GetGameHashes.php", Params::new().with("i", game_id))
            .await
    }

    /// IDs of every achievement in the game.
    pub async fn achievement_ids(&self, game_id: u64) -> Result<Value, ApiError> {
        self.client
            .get("API_GetAchievementCount.php", Params::new().with("i", game_id))
            .await
    }

    /// How many players unlocked how many achievements.
    pub async fn achievement_distribution(
        &self,
        game_id: u64,
        hardcore_only: bool,
        set: Option<AchievementSet>,
    ) -> Result<Value, ApiError> {
        let params = Params::new()
            .with("i", game_id)
            .with_flag("h", hardcore_only)
            .with("f", set.unwrap_or_default().as_code());
        self.client
            .get("API_GetAchievementDistribution.php", params)
            .await
    }

    /// Top high scores or latest masters for a game.
    pub async fn rank_and_score(&self, game_id: u64, ranking: Ranking) -> Result<Value, ApiError> {
        let params = Params::new()
            .with("g", game_id)
            .with("t", ranking.as_code());
        self.client
            .get("API_GetGameRankAndScore.php", params)
            .await
    }
}
