//! Shared argument types used across all domain modules.
//!
//! Each enum renders to the exact token the web API expects (`as_code` or
//! `as_str`) and, where callers may hold a raw value, converts from it with
//! `TryFrom`, failing with [`ApiError::InvalidArgument`].

pub mod date;

pub use date::{parse_datetime, DateArg};

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

// ─── AchievementSet ──────────────────────────────────────────────────────────

/// Which achievement set an endpoint should report on (`f` parameter).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementSet {
    #[default]
    Official,
    Unofficial,
}

impl AchievementSet {
    pub fn as_code(&self) -> u8 {
        match self {
            Self::Official => 3,
            Self::Unofficial => 5,
        }
    }
}

impl TryFrom<u8> for AchievementSet {
    type Error = ApiError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            3 => Ok(Self::Official),
            5 => Ok(Self::Unofficial),
            other => Err(ApiError::invalid(format!(
                "achievement set flag must be 3 or 5, got {}",
                other
            ))),
        }
    }
}

impl std::fmt::Display for AchievementSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

/// Look up `input` in a fixed table of `(token, value)` pairs.
pub(crate) fn lookup<T: Copy>(
    table: &[(&str, T)],
    input: &str,
    what: &str,
) -> Result<T, ApiError> {
    let needle = input.trim();
    table
        .iter()
        .find(|(token, _)| token.eq_ignore_ascii_case(needle))
        .map(|(_, value)| *value)
        .ok_or_else(|| {
            let allowed: Vec<&str> = table.iter().map(|(token, _)| *token).collect();
            ApiError::invalid(format!(
                "unknown {} '{}' (expected one of: {})",
                what,
                input,
                allowed.join(", ")
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_achievement_set_codes() {
        assert_eq!(AchievementSet::default(), AchievementSet::Official);
        assert_eq!(AchievementSet::Official.as_code(), 3);
        assert_eq!(AchievementSet::Unofficial.to_string(), "5");
        assert_eq!(AchievementSet::try_from(5).unwrap(), AchievementSet::Unofficial);
        assert!(AchievementSet::try_from(4).is_err());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let table = [("alpha", 1), ("beta", 2)];
        assert_eq!(lookup(&table, "Beta", "letter").unwrap(), 2);
        let err = lookup(&table, "gamma", "letter").unwrap_err();
        assert!(err.to_string().contains("alpha, beta"));
    }
}
