//! Resource groups organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: argument types (enums with their wire tokens) and endpoint defaults
//! - `client.rs`: Sub-client mapping typed arguments to one endpoint call each
//!
//! Responses are returned as `serde_json::Value`, exactly as the server sent them.

pub mod achievement;
pub mod comment;
pub mod feed;
pub mod game;
pub mod leaderboard;
pub mod system;
pub mod ticket;
pub mod user;
