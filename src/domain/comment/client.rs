//! Comments sub-client.

use crate::client::CheevosClient;
use crate::domain::comment::{CommentKind, CommentSort, PAGE_COUNT};
use crate::error::ApiError;
use crate::http::Params;

use serde_json::Value;
use std::fmt::Display;

pub struct Comments<'a> {
    pub(crate) client: &'a CheevosClient,
}

impl<'a> Comments<'a> {
    /// Comments on a game, achievement or user wall.
    ///
    /// `target` is a game ID, achievement ID, or username/ULID depending on
    /// `kind`. `kind` takes a [`CommentKind`] or its name/code; anything else
    /// fails before a request is sent.
    pub async fn for_target<K>(
        &self,
        target: impl Display,
        kind: K,
        count: Option<u32>,
        offset: Option<u32>,
        sort: Option<CommentSort>,
    ) -> Result<Value, ApiError>
    where
        K: TryInto<CommentKind>,
        ApiError: From<K::Error>,
    {
        let kind: CommentKind = kind.try_into()?;

        let params = Params::new()
            .with("i", target)
            .with("t", kind.as_code())
            .with_page(count, PAGE_COUNT, offset)
            .with("sort", sort.unwrap_or_default().as_str());
        self.client.get("API_GetComments.php", params).await
    }
}
