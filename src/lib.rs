//! # retro-cheevos
//!
//! An async Rust client for the RetroAchievements web API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Error type, credentials, shared argument types (always available)
//! 2. **HTTP**: `CheevosHttp`: one authenticated GET, status classification, JSON parsing
//! 3. **High-Level Client**: `CheevosClient` with one sub-client per resource group
//!
//! Every call issues at most one request and returns the decoded JSON as-is.
//! There is no caching, retrying or rate-limiting.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use retro_cheevos::prelude::*;
//!
//! let client = CheevosClient::new("MyUser", "my-web-api-key")?;
//!
//! let points = client.user().points("Cheevo").await?;
//! let game = client.game().extended_details(14402, None).await?;
//! let awards = client.feed().recent_awards("2024-03-05", "mastered", None, None).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Unified SDK error type.
pub mod error;

/// Network constants.
pub mod network;

/// Account credentials.
pub mod auth;

/// Shared argument types and date parsing.
pub mod shared;

/// Resource groups: argument types and sub-clients.
pub mod domain;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// HTTP transport and query parameters.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `CheevosClient`: the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Errors
    pub use crate::error::{ApiError, ApiResult};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Auth
    pub use crate::auth::Credentials;

    // Shared argument types
    pub use crate::shared::{AchievementSet, DateArg};

    // Domain argument types
    pub use crate::domain::comment::{CommentKind, CommentSort};
    pub use crate::domain::feed::{AwardKind, ClaimKind};
    pub use crate::domain::game::Ranking;
    pub use crate::domain::user::SetRequestScope;

    // HTTP
    pub use crate::http::Params;

    // Client + sub-clients
    pub use crate::client::{
        AchievementClient, CheevosClient, CheevosClientBuilder, CommentClient, FeedClient,
        GameClient, LeaderboardClient, SystemClient, TicketClient, UserClient,
    };
}

pub use client::CheevosClient;
pub use error::{ApiError, ApiResult};
