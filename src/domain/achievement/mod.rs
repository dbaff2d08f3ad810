//! Achievement domain.

pub mod client;

pub(crate) const UNLOCKS_COUNT: u32 = 50;
