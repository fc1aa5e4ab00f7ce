// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! TryHackMe public API client.
//!
//! Handles:
//! - Public profile lookup by username
//! - Yearly activity lookup by either user id scheme

use crate::models::{ActivityDocument, ProfileDocument};
use async_trait::async_trait;
use serde::Deserialize;

/// Failure talking to the TryHackMe API.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Decode(String),
}

/// Read-only view of the platform's public profile endpoints.
#[async_trait]
pub trait ProfileApi: Send + Sync {
    /// `GET /public-profile?username=`
    async fn fetch_profile(&self, username: &str) -> Result<ProfileDocument, UpstreamError>;

    /// `GET /public-profile/yearly-activity?user=&year=`
    async fn fetch_yearly_activity(
        &self,
        user: &str,
        year: i32,
    ) -> Result<ActivityDocument, UpstreamError>;
}

/// TryHackMe API client.
#[derive(Clone)]
pub struct ThmClient {
    http: reqwest::Client,
    base_url: String,
}

impl ThmClient {
    /// Create a client against the given API base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Generic GET request with JSON response.
    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, UpstreamError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// Check response and parse JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, UpstreamError> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            if status.as_u16() == 429 {
                tracing::warn!("TryHackMe rate limit hit (429)");
            }

            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| UpstreamError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ProfileApi for ThmClient {
    async fn fetch_profile(&self, username: &str) -> Result<ProfileDocument, UpstreamError> {
        self.get_json("/public-profile", &[("username", username.to_string())])
            .await
    }

    async fn fetch_yearly_activity(
        &self,
        user: &str,
        year: i32,
    ) -> Result<ActivityDocument, UpstreamError> {
        self.get_json(
            "/public-profile/yearly-activity",
            &[("user", user.to_string()), ("year", year.to_string())],
        )
        .await
    }
}
