// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fetched record snapshot.

use serde::Deserialize;

/// Full state of a carrier record as returned by a snapshot fetch.
///
/// Fields are deserialized in their raw wire form; range and grammar
/// validation happens when the snapshot is routed through the carrier's
/// setters, the same path local mutations take.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Snapshot {
    /// Color in `rgb(r,g,b)` string form.
    #[serde(rename = "colorValue")]
    pub color_value: String,
    /// Brightness (0-100).
    pub brightness: i32,
    /// Forward drive flag.
    #[serde(rename = "driveForward")]
    pub drive_forward: bool,
    /// Backward drive flag.
    #[serde(rename = "driveBackward")]
    pub drive_backward: bool,
    /// Flight mode flag.
    #[serde(rename = "flightMode")]
    pub flight_mode: bool,
}
