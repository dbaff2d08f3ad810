//! Systems sub-client: console listing and console game lists.

use crate::client::CheevosClient;
use crate::domain::system::GAME_LIST_COUNT;
use crate::error::ApiError;
use crate::http::Params;

use serde_json::Value;

/// Sub-client for system (console) operations.
pub struct Systems<'a> {
    pub(crate) client: &'a CheevosClient,
}

impl<'a> Systems<'a> {
    /// Console IDs and names.
    pub async fn consoles(&self, active_only: bool, gaming_only: bool) -> Result<Value, ApiError> {
        let params = Params::new()
            .with_flag("a", active_only)
            .with_flag("g", gaming_only);
        self.client.get("API_GetConsoleIDs.php", params).await
    }

    /// Games for one console.
    ///
    /// `count` defaults to 0, which the server reads as "no limit".
    pub async fn games(
        &self,
        console_id: u32,
        with_achievements_only: bool,
        with_hashes: bool,
        count: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Value, ApiError> {
        let params = Params::new()
            .with("i", console_id)
            .with_flag("f", with_achievements_only)
            .with_flag("h", with_hashes)
            .with_page(count, GAME_LIST_COUNT, offset);
        self.client.get("API_GetGameList.php", params).await
    }
}
