//! User domain: profiles, unlocks, progress, social lists, set requests.

pub mod client;

use serde::{Deserialize, Serialize};

// ─── SetRequestScope ─────────────────────────────────────────────────────────

/// Which of a user's set requests to list (`t` parameter).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SetRequestScope {
    /// Only requests for games that still have no achievement set.
    #[default]
    Active,
    /// Every request the user ever made.
    All,
}

impl SetRequestScope {
    pub fn as_code(&self) -> u8 {
        match self {
            Self::Active => 0,
            Self::All => 1,
        }
    }
}

/// Defaults for the user endpoints.
pub(crate) mod defaults {
    pub const RECENT_UNLOCK_MINUTES: u32 = 60;
    pub const COMPLETION_PROGRESS_COUNT: u32 = 100;
    pub const RECENTLY_PLAYED_COUNT: u32 = 10;
    pub const SUMMARY_RECENT_GAMES: u32 = 0;
    pub const SUMMARY_RECENT_ACHIEVEMENTS: u32 = 10;
    pub const WANT_TO_PLAY_COUNT: u32 = 100;
    pub const FOLLOW_LIST_COUNT: u32 = 100;
}
