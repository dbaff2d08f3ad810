//! Network constants for the RetroAchievements SDK.

use std::time::Duration;

/// Default web API base URL. Endpoint names are appended directly.
pub const DEFAULT_API_URL: &str = "https://retroachievements.org/API/";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Query parameter carrying the API key on every request.
pub const AUTH_PARAM: &str = "y";

/// Default `User-Agent` header.
pub const DEFAULT_USER_AGENT: &str = concat!("retro-cheevos-rs/", env!("CARGO_PKG_VERSION"));
