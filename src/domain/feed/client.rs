//! Feed sub-client: recent awards, claims, top users.

use crate::client::CheevosClient;
use crate::domain::feed::{AwardKind, ClaimKind, RECENT_AWARDS_COUNT};
use crate::error::ApiError;
use crate::http::Params;
use crate::shared::DateArg;

use serde_json::Value;

pub struct Feed<'a> {
    pub(crate) client: &'a CheevosClient,
}

impl<'a> Feed<'a> {
    /// Game awards earned since `start_date`, filtered to one award kind.
    ///
    /// `kind` takes an [`AwardKind`] or its name; anything else fails before
    /// a request is sent.
    pub async fn recent_awards<K>(
        &self,
        start_date: impl DateArg,
        kind: K,
        count: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Value, ApiError>
    where
        K: TryInto<AwardKind>,
        ApiError: From<K::Error>,
    {
        let kind: AwardKind = kind.try_into()?;
        let date = start_date.to_ymd()?;

        let params = Params::new()
            .with("d", date)
            .with("k", kind.as_str())
            .with_page(count, RECENT_AWARDS_COUNT, offset);
        self.client
            .get("API_GetRecentGameAwards.php", params)
            .await
    }

    /// Every active set claim (at most 1000).
    pub async fn active_claims(&self) -> Result<Value, ApiError> {
        self.client
            .get("API_GetActiveClaims.php", Params::new())
            .await
    }

    /// Completed, dropped or expired claims (at most 1000).
    pub async fn inactive_claims<K>(&self, kind: K) -> Result<Value, ApiError>
    where
        K: TryInto<ClaimKind>,
        ApiError: From<K::Error>,
    {
        let kind: ClaimKind = kind.try_into()?;
        self.client
            .get("API_GetClaims.php", Params::new().with("k", kind.as_code()))
            .await
    }

    /// Current top ten users by hardcore points.
    pub async fn top_ten_users(&self) -> Result<Value, ApiError> {
        self.client
            .get("API_GetTopTenUsers.php", Params::new())
            .await
    }
}
