// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the Lernträger library.
//!
//! Two failure classes are kept strictly apart: local validation errors are
//! raised synchronously to the caller of the triggering operation, while
//! remote write failures surface only as diagnostic log output from the
//! detached push tasks.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred during HTTP communication with the record store.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a fetched record snapshot.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values. Local state is never modified when one is raised.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A color channel value is outside the valid range (0-255).
    #[error("channel value {0} is out of range [0, 255]")]
    InvalidChannel(String),

    /// A brightness value is outside the valid range (0-100).
    #[error("brightness value {0} is out of range [0, 100]")]
    InvalidBrightness(i32),

    /// A value was not recognized as a boolean.
    #[error("value is not a boolean (true or false): {0}")]
    InvalidSwitch(String),

    /// A color string does not match the `rgb(r,g,b)` grammar.
    #[error("value is not a valid RGB string: {0}")]
    InvalidRgbString(String),

    /// The carrier name is empty.
    #[error("carrier name must not be empty")]
    EmptyName,
}

/// Errors related to HTTP communication with the record store.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The record store rejected an update.
    #[error("record store rejected update with status {status}: {body}")]
    RemoteRejected {
        /// HTTP status code of the rejection.
        status: u16,
        /// Response body returned by the record store.
        body: String,
    },

    /// The record store answered a fetch with a failure status.
    #[error("record fetch failed with status {0}")]
    FetchFailed(u16),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
