//! Comment domain: comment wall target kinds and sort order.

pub mod client;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ApiError;
use crate::shared::lookup;

pub(crate) const PAGE_COUNT: u32 = 100;

// ─── CommentKind ─────────────────────────────────────────────────────────────

/// What a comment wall belongs to (`t` parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentKind {
    Game,
    Achievement,
    User,
}

impl CommentKind {
    const TOKENS: &'static [(&'static str, CommentKind)] = &[
        ("game", CommentKind::Game),
        ("achievement", CommentKind::Achievement),
        ("user", CommentKind::User),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Game => "game",
            Self::Achievement => "achievement",
            Self::User => "user",
        }
    }

    pub fn as_code(&self) -> u8 {
        match self {
            Self::Game => 1,
            Self::Achievement => 2,
            Self::User => 3,
        }
    }
}

impl std::fmt::Display for CommentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CommentKind {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(Self::TOKENS, s, "comment kind")
    }
}

impl TryFrom<&str> for CommentKind {
    type Error = ApiError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<u8> for CommentKind {
    type Error = ApiError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Game),
            2 => Ok(Self::Achievement),
            3 => Ok(Self::User),
            other => Err(ApiError::invalid(format!(
                "comment kind code must be 1, 2 or 3, got {}",
                other
            ))),
        }
    }
}

/// Unsuffixed integer literals (`for_target(id, 1, ..)`) land here.
impl TryFrom<i32> for CommentKind {
    type Error = ApiError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        let code = u8::try_from(code).map_err(|_| {
            ApiError::invalid(format!("comment kind code must be 1, 2 or 3, got {}", code))
        })?;
        Self::try_from(code)
    }
}

// ─── CommentSort ─────────────────────────────────────────────────────────────

/// Comment ordering by submission time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentSort {
    #[default]
    Oldest,
    Newest,
}

impl CommentSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Oldest => "submitted",
            Self::Newest => "-submitted",
        }
    }
}
