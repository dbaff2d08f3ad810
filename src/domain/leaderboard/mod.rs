//! Leaderboard domain.

pub mod client;

pub(crate) const PAGE_COUNT: u32 = 100;
