//! Users sub-client: profile, unlock history, progress and social queries.

use crate::client::CheevosClient;
use crate::domain::user::defaults::*;
use crate::domain::user::SetRequestScope;
use crate::error::ApiError;
use crate::http::Params;
use crate::shared::DateArg;

use serde_json::Value;

/// Sub-client for user operations.
pub struct Users<'a> {
    pub(crate) client: &'a CheevosClient,
}

impl<'a> Users<'a> {
    /// Profile of a user, by username or ULID.
    pub async fn profile(&self, user: &str) -> Result<Value, ApiError> {
        self.client
            .get("API_GetUserProfile.php", Params::new().with("u", user))
            .await
    }

    /// Achievements unlocked in the last `minutes` (default 60).
    pub async fn recent_unlocks(
        &self,
        user: &str,
        minutes: Option<u32>,
    ) -> Result<Value, ApiError> {
        let params = Params::new()
            .with("u", user)
            .with("m", minutes.unwrap_or(RECENT_UNLOCK_MINUTES));
        self.client
            .get("API_GetUserRecentAchievements.php", params)
            .await
    }

    /// Achievements unlocked between two instants, sent as Unix seconds.
    pub async fn unlocks_between(
        &self,
        user: &str,
        from: impl DateArg,
        to: impl DateArg,
    ) -> Result<Value, ApiError> {
        let from = from.to_unix_seconds()?;
        let to = to.to_unix_seconds()?;
        if from > to {
            return Err(ApiError::invalid(format!(
                "range start ({}) is after range end ({})",
                from, to
            )));
        }

        let params = Params::new().with("u", user).with("f", from).with("t", to);
        self.client
            .get("API_GetAchievementsEarnedBetween.php", params)
            .await
    }

    /// Achievements unlocked on one calendar day, sent as `YYYY-MM-DD`.
    pub async fn unlocks_on_date(&self, user: &str, date: impl DateArg) -> Result<Value, ApiError> {
        let params = Params::new().with("u", user).with("d", date.to_ymd()?);
        self.client
            .get("API_GetAchievementsEarnedOnDay.php", params)
            .await
    }

    /// Game metadata plus the user's progress in it.
    ///
    /// `award_metadata` adds the user's highest award for the game.
    pub async fn game_progress(
        &self,
        user: &str,
        game_id: u64,
        award_metadata: bool,
    ) -> Result<Value, ApiError> {
        let params = Params::new()
            .with("u", user)
            .with("g", game_id)
            .with_flag("a", award_metadata);
        self.client
            .get("API_GetGameInfoAndUserProgress.php", params)
            .await
    }

    /// Completion progress across every game the user has played.
    pub async fn completion_progress(
        &self,
        user: &str,
        count: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Value, ApiError> {
        let params = Params::new()
            .with("u", user)
            .with_page(count, COMPLETION_PROGRESS_COUNT, offset);
        self.client
            .get("API_GetUserCompletionProgress.php", params)
            .await
    }

    pub async fn recently_played(
        &self,
        user: &str,
        count: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Value, ApiError> {
        let params = Params::new()
            .with("u", user)
            .with_page(count, RECENTLY_PLAYED_COUNT, offset);
        self.client
            .get("API_GetUserRecentlyPlayedGames.php", params)
            .await
    }

    /// Site and game awards (beaten, mastered, events) summary.
    pub async fn awards(&self, user: &str) -> Result<Value, ApiError> {
        self.client
            .get("API_GetUserAwards.php", Params::new().with("u", user))
            .await
    }

    /// Achievement set development claims made by the user.
    pub async fn claims(&self, user: &str) -> Result<Value, ApiError> {
        self.client
            .get("API_GetUserClaims.php", Params::new().with("u", user))
            .await
    }

    pub async fn game_rank_and_score(&self, user: &str, game_id: u64) -> Result<Value, ApiError> {
        let params = Params::new().with("u", user).with("g", game_id);
        self.client
            .get("API_GetUserGameRankAndScore.php", params)
            .await
    }

    /// Hardcore and softcore point totals.
    pub async fn points(&self, user: &str) -> Result<Value, ApiError> {
        self.client
            .get("API_GetUserPoints.php", Params::new().with("u", user))
            .await
    }

    /// Progress for a specific list of games.
    pub async fn progress(&self, user: &str, game_ids: &[u64]) -> Result<Value, ApiError> {
        if game_ids.is_empty() {
            return Err(ApiError::invalid("game_ids cannot be empty"));
        }

        let params = Params::new()
            .with("u", user)
            .with_list("i", game_ids.iter());
        self.client.get("API_GetUserProgress.php", params).await
    }

    /// Profile summary with the most recent games (default 0) and
    /// achievements (default 10).
    pub async fn summary(
        &self,
        user: &str,
        recent_games: Option<u32>,
        recent_achievements: Option<u32>,
    ) -> Result<Value, ApiError> {
        let params = Params::new()
            .with("u", user)
            .with("g", recent_games.unwrap_or(SUMMARY_RECENT_GAMES))
            .with("a", recent_achievements.unwrap_or(SUMMARY_RECENT_ACHIEVEMENTS));
        self.client.get("API_GetUserSummary.php", params).await
    }

    /// Legacy completed-games list.
    pub async fn completed_games(&self, user: &str) -> Result<Value, ApiError> {
        self.client
            .get("API_GetUserCompletedGames.php", Params::new().with("u", user))
            .await
    }

    pub async fn want_to_play(
        &self,
        user: &str,
        count: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Value, ApiError> {
        let params = Params::new()
            .with("u", user)
            .with_page(count, WANT_TO_PLAY_COUNT, offset);
        self.client
            .get("API_GetUserWantToPlayList.php", params)
            .await
    }

    /// Users the authenticated account follows.
    pub async fn following(
        &self,
        count: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Value, ApiError> {
        let params = Params::new().with_page(count, FOLLOW_LIST_COUNT, offset);
        self.client.get("API_GetUsersIFollow.php", params).await
    }

    /// Users following the authenticated account.
    pub async fn followers(
        &self,
        count: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Value, ApiError> {
        let params = Params::new().with_page(count, FOLLOW_LIST_COUNT, offset);
        self.client
            .get("API_GetUsersFollowingMe.php", params)
            .await
    }

    pub async fn set_requests(
        &self,
        user: &str,
        scope: SetRequestScope,
    ) -> Result<Value, ApiError> {
        let params = Params::new().with("u", user).with("t", scope.as_code());
        self.client
            .get("API_GetUserSetRequests.php", params)
            .await
    }
}
