//! Achievements sub-client.

use crate::client::CheevosClient;
use crate::domain::achievement::UNLOCKS_COUNT;
use crate::error::ApiError;
use crate::http::Params;

use serde_json::Value;

pub struct Achievements<'a> {
    pub(crate) client: &'a CheevosClient,
}

impl<'a> Achievements<'a> {
    /// Players who unlocked an achievement, most recent first.
    pub async fn unlocks(
        &self,
        achievement_id: u64,
        count: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Value, ApiError> {
        let params = Params::new()
            .with("a", achievement_id)
            .with_page(count, UNLOCKS_COUNT, offset);
        self.client
            .get("API_GetAchievementUnlocks.php", params)
            .await
    }
}
