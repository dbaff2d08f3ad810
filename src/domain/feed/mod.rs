//! Feed domain: site-wide award and claim feeds.

pub mod client;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ApiError;
use crate::shared::lookup;

pub(crate) const RECENT_AWARDS_COUNT: u32 = 100;

// ─── AwardKind ───────────────────────────────────────────────────────────────

/// Game award kind for the recent-awards feed (`k` parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AwardKind {
    BeatenSoftcore,
    BeatenHardcore,
    Completed,
    Mastered,
}

impl AwardKind {
    const TOKENS: &'static [(&'static str, AwardKind)] = &[
        ("beaten-softcore", AwardKind::BeatenSoftcore),
        ("beaten-hardcore", AwardKind::BeatenHardcore),
        ("completed", AwardKind::Completed),
        ("mastered", AwardKind::Mastered),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BeatenSoftcore => "beaten-softcore",
            Self::BeatenHardcore => "beaten-hardcore",
            Self::Completed => "completed",
            Self::Mastered => "mastered",
        }
    }
}

impl std::fmt::Display for AwardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AwardKind {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(Self::TOKENS, s, "award kind")
    }
}

impl TryFrom<&str> for AwardKind {
    type Error = ApiError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

// ─── ClaimKind ───────────────────────────────────────────────────────────────

/// Inactive set claim status (`k` parameter).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimKind {
    #[default]
    Completed,
    Dropped,
    Expired,
}

impl ClaimKind {
    const TOKENS: &'static [(&'static str, ClaimKind)] = &[
        ("completed", ClaimKind::Completed),
        ("dropped", ClaimKind::Dropped),
        ("expired", ClaimKind::Expired),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Dropped => "dropped",
            Self::Expired => "expired",
        }
    }

    pub fn as_code(&self) -> u8 {
        match self {
            Self::Completed => 1,
            Self::Dropped => 2,
            Self::Expired => 3,
        }
    }
}

impl std::fmt::Display for ClaimKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ClaimKind {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(Self::TOKENS, s, "claim kind")
    }
}

impl TryFrom<&str> for ClaimKind {
    type Error = ApiError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}
