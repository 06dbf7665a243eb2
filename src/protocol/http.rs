// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP access to the carrier record store.
//!
//! Each carrier record is addressed by the base URL of the store plus the
//! carrier's percent-encoded display name. Snapshots are fetched with `GET`,
//! updates applied with `PATCH`.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;

use crate::error::ProtocolError;

/// Base URL of the production carrier record store.
pub const DEFAULT_BASE_URL: &str =
    "https://thowllerntrager-sandbox.mxapps.io/rest/lerntraeger/v1/lerntraeger/";

/// Configuration for the record store connection.
///
/// # Examples
///
/// ```
/// use lerntraeger_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// // Production record store with default timeout
/// let config = HttpConfig::new();
///
/// // Custom store location (e.g. a staging deployment)
/// let config = HttpConfig::new()
///     .with_base_url("https://staging.example.org/rest/lerntraeger/v1/lerntraeger")
///     .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    base_url: String,
    timeout: Duration,
}

impl HttpConfig {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration pointing at the production record store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom record store base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Creates an [`HttpClient`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(HttpClient {
            base_url: self.base_url,
            client,
        })
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// HTTP client for one carrier record store.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    /// Returns the base URL of the record store.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the resource locator for a carrier record.
    ///
    /// The display name (`"<name> Lernträger"`) keys the record and is
    /// percent-encoded onto the base URL.
    #[must_use]
    pub fn record_url(&self, display_name: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(display_name)
        )
    }

    /// Fetches the record snapshot for a carrier.
    ///
    /// Returns the raw JSON body; deserialization and validation happen in
    /// the carrier's setter path.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the store answers with a
    /// non-success status.
    pub async fn fetch_record(&self, display_name: &str) -> Result<String, ProtocolError> {
        let url = self.record_url(display_name);

        tracing::debug!(url = %url, "fetching carrier record");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(ProtocolError::Http)?;

        if !response.status().is_success() {
            return Err(ProtocolError::FetchFailed(response.status().as_u16()));
        }

        response.text().await.map_err(ProtocolError::Http)
    }

    /// Applies an update to a carrier record.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::Http`] if the request fails, or
    /// [`ProtocolError::RemoteRejected`] if the store answers with a status
    /// above 400.
    pub async fn patch_record<B: Serialize + Sync>(
        &self,
        display_name: &str,
        body: &B,
    ) -> Result<(), ProtocolError> {
        let url = self.record_url(display_name);

        tracing::debug!(url = %url, "applying carrier record update");

        let response = self
            .client
            .patch(&url)
            .json(body)
            .send()
            .await
            .map_err(ProtocolError::Http)?;

        let status = response.status();
        if status.as_u16() > 400 {
            let body = response.text().await.unwrap_or_default();
            return Err(ProtocolError::RemoteRejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
