//! Game domain: summaries, extended details, hashes, unlock distribution.

pub mod client;

use serde::{Deserialize, Serialize};

// ─── Ranking ─────────────────────────────────────────────────────────────────

/// Which top list `rank_and_score` returns (`t` parameter).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ranking {
    /// Highest scores among players without a mastery.
    #[default]
    HighScores,
    /// Latest masteries.
    Masters,
}

impl Ranking {
    pub fn as_code(&self) -> u8 {
        match self {
            Self::HighScores => 0,
            Self::Masters => 1,
        }
    }
}
