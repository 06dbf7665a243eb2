// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Carrier builder.

use crate::carrier::Lerntraeger;
use crate::error::{Result, ValueError};
use crate::protocol::HttpConfig;

/// Builder for creating a [`Lerntraeger`].
///
/// # Examples
///
/// ```no_run
/// use lerntraeger_lib::Lerntraeger;
/// use std::time::Duration;
///
/// # fn example() -> lerntraeger_lib::Result<()> {
/// // Production record store, initial refresh spawned in the background
/// let carrier = Lerntraeger::builder("Alpha").build()?;
///
/// // Custom store location, no initial refresh
/// let carrier = Lerntraeger::builder("Alpha")
///     .with_base_url("http://localhost:8080/records")
///     .with_timeout(Duration::from_secs(5))
///     .build_without_refresh()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct LerntraegerBuilder {
    name: String,
    config: HttpConfig,
}

impl LerntraegerBuilder {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            config: HttpConfig::new(),
        }
    }

    /// Replaces the HTTP configuration.
    #[must_use]
    pub fn with_config(mut self, config: HttpConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets a custom record store base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config = self.config.with_base_url(base_url);
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.config = self.config.with_timeout(timeout);
        self
    }

    /// Builds the carrier and spawns the initial snapshot refresh.
    ///
    /// The carrier is usable with its defaults immediately; the fetched
    /// snapshot silently overwrites them once the refresh resolves. A failed
    /// refresh is logged and otherwise discarded.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns error if the name is empty or the HTTP client cannot be
    /// created.
    pub fn build(self) -> Result<Lerntraeger> {
        let carrier = self.build_without_refresh()?;

        let handle = carrier.clone();
        tokio::spawn(async move {
            if let Err(err) = handle.refresh_all().await {
                tracing::error!(
                    error = %err,
                    carrier = %handle.name(),
                    "initial carrier refresh failed"
                );
            }
        });

        Ok(carrier)
    }

    /// Builds the carrier without the initial refresh.
    ///
    /// The local mirror keeps its defaults until
    /// [`refresh_all`](Lerntraeger::refresh_all) is called explicitly.
    ///
    /// # Errors
    ///
    /// Returns error if the name is empty or the HTTP client cannot be
    /// created.
    pub fn build_without_refresh(self) -> Result<Lerntraeger> {
        if self.name.is_empty() {
            return Err(ValueError::EmptyName.into());
        }
        let client = self.config.into_client()?;
        Ok(Lerntraeger::new(self.name, client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn builder_rejects_empty_name() {
        let result = Lerntraeger::builder("").build_without_refresh();
        assert!(matches!(
            result.unwrap_err(),
            Error::Value(ValueError::EmptyName)
        ));
    }

    #[test]
    fn builder_derives_display_name() {
        let carrier = Lerntraeger::builder("Alpha")
            .build_without_refresh()
            .unwrap();
        assert_eq!(carrier.display_name(), "Alpha Lernträger");
    }

    #[test]
    fn builder_with_custom_config() {
        let carrier = Lerntraeger::builder("Alpha")
            .with_base_url("http://localhost:8080/records")
            .with_timeout(std::time::Duration::from_secs(5))
            .build_without_refresh()
            .unwrap();
        assert_eq!(carrier.name(), "Alpha");
    }
}
