// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for the carrier record store.
//!
//! The store is a plain REST resource: one record per carrier, keyed by
//! display name. [`HttpClient`] wraps the two operations the contract
//! defines, snapshot fetch and record update.

mod http;

pub use http::{DEFAULT_BASE_URL, HttpClient, HttpConfig};
