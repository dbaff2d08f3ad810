//! System domain: consoles and per-console game lists.

pub mod client;

/// `c` = 0 asks the server for every game.
pub(crate) const GAME_LIST_COUNT: u32 = 0;
