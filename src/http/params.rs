//! Query parameters for a single endpoint call.
//!
//! Conventions, shared by every endpoint:
//! - integers and strings are rendered with `Display`
//! - booleans become `0` / `1`
//! - `None` values are left out of the query string
//! - lists are comma-joined into one value (`i=1,2,3`)

use std::fmt::Display;

/// Ordered list of query pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(&'static str, String)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a scalar value.
    pub fn with(mut self, key: &'static str, value: impl Display) -> Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    /// Append a value only when present.
    pub fn with_opt(self, key: &'static str, value: Option<impl Display>) -> Self {
        match value {
            Some(v) => self.with(key, v),
            None => self,
        }
    }

    /// Append a boolean flag as `0` / `1`.
    pub fn with_flag(self, key: &'static str, value: bool) -> Self {
        self.with(key, u8::from(value))
    }

    /// Append a list as one comma-joined value.
    pub fn with_list<I>(self, key: &'static str, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let joined = values
            .into_iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.with(key, joined)
    }

    /// Append `count` / `offset` pagination, falling back to the endpoint's
    /// defaults when not given.
    pub fn with_page(
        self,
        count: Option<u32>,
        default_count: u32,
        offset: Option<u32>,
    ) -> Self {
        self.with("c", count.unwrap_or(default_count))
            .with("o", offset.unwrap_or(0))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| *k == key)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Drop every pair with this key, returning how many were removed.
    pub(crate) fn remove(&mut self, key: &str) -> usize {
        let before = self.pairs.len();
        self.pairs.retain(|(k, _)| *k != key);
        before - self.pairs.len()
    }
}
