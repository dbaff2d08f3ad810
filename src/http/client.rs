//! Low-level HTTP client: `CheevosHttp`.
//!
//! One method for every endpoint: `get(endpoint, params)`. Builds the full URL
//! (base + endpoint + URL-encoded query with the API key merged in), issues a
//! single GET, classifies the status and parses the body as JSON. No retries.

use crate::auth::Credentials;
use crate::error::ApiError;
use crate::http::params::Params;
use crate::network::AUTH_PARAM;

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Low-level HTTP client for the RetroAchievements web API.
#[derive(Debug, Clone)]
pub struct CheevosHttp {
    base_url: String,
    client: Client,
    /// API key lives here only. NEVER exposed publicly.
    credentials: Credentials,
}

impl CheevosHttp {
    pub fn new(
        base_url: &str,
        credentials: Credentials,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            base_url: format!("{}/", base_url.trim_end_matches('/')),
            client,
            credentials,
        })
    }

    /// Base URL, always ending in exactly one `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Issue a GET to `endpoint` and return the decoded JSON body verbatim.
    pub async fn get(&self, endpoint: &str, params: Params) -> Result<Value, ApiError> {
        let url = self.url_for(endpoint, params)?;

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();

        tracing::debug!(endpoint, status = status.as_u16(), "Received response");

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = resp.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Full request URL. The auth pair always comes first and appears once.
    pub(crate) fn url_for(&self, endpoint: &str, mut params: Params) -> Result<String, ApiError> {
        let endpoint = endpoint.trim_start_matches('/');
        if endpoint.is_empty() {
            return Err(ApiError::invalid("endpoint name cannot be empty"));
        }

        let dropped = params.remove(AUTH_PARAM);
        if dropped > 0 {
            tracing::warn!(
                endpoint,
                dropped,
                "Ignoring caller-supplied '{}' parameter; it is reserved for the API key",
                AUTH_PARAM
            );
        }

        let mut pairs = Vec::with_capacity(params.len() + 1);
        pairs.push((AUTH_PARAM, self.credentials.api_key()));
        pairs.extend(params.iter());

        let query = serde_urlencoded::to_string(&pairs)
            .map_err(|e| ApiError::invalid(format!("cannot encode query: {}", e)))?;

        Ok(format!("{}{}?{}", self.base_url, endpoint, query))
    }
}
