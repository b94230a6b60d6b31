// Copyright 2025 Chris Custine
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! HTTP access to the registration status endpoint.
//!
//! One GET per call, no retries. The request timeout is whatever the
//! transport does unless [`ClientConfig::timeout`] is set.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{StatusCode, Url};
use thiserror::Error;

use crate::report::StatusReport;

/// Path of the status resource, relative to the base URL.
pub const STATUS_PATH: &str = "getRegistrationStatus";

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://repository.jspl.com/RepositoryApp/api";

/// The only message users ever see for a failed fetch.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch data";

/// Errors that can occur while fetching a report.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid base URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server returned HTTP {0}")]
    HttpStatus(StatusCode),

    #[error("malformed status body: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    /// Text shown to the user. Deliberately the same for every variant.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }
}

/// Configuration for [`StatusClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL; the status path is appended to it.
    pub base_url: String,
    /// Optional whole-request timeout.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

/// Fetches [`StatusReport`]s from a fixed endpoint.
#[derive(Debug, Clone)]
pub struct StatusClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl StatusClient {
    pub fn new(config: &ClientConfig) -> Result<Self, FetchError> {
        let endpoint = status_endpoint(&config.base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            endpoint,
        })
    }

    /// Full URL of the status resource.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Issue one GET and parse the body.
    pub async fn fetch(&self) -> Result<StatusReport, FetchError> {
        let response = self
            .http
            .get(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status));
        }

        let body = response.bytes().await?;
        Ok(StatusReport::from_json(&body)?)
    }
}

/// Join the base URL and the status path without doubling the slash.
fn status_endpoint(base_url: &str) -> Result<Url, FetchError> {
    let url = format!("{}/{}", base_url.trim_end_matches('/'), STATUS_PATH);
    Url::parse(&url).map_err(|e| FetchError::InvalidUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })
}
