// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Outgoing record update payloads.
//!
//! The record store reads camelCase field names but expects the boolean
//! flags in PascalCase on writes. The asymmetry is part of the observed wire
//! contract and must not be normalized.

use serde::Serialize;

use crate::types::{Brightness, RgbColor};

/// A write containing the carrier's display name plus exactly one changed
/// field.
///
/// # Examples
///
/// ```
/// use lerntraeger_lib::record::PartialUpdate;
/// use lerntraeger_lib::types::Brightness;
///
/// let update = PartialUpdate::brightness("Alpha Lernträger", Brightness::new(50).unwrap());
/// let json = serde_json::to_value(&update).unwrap();
/// assert_eq!(json, serde_json::json!({"Name": "Alpha Lernträger", "brightness": 50}));
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct PartialUpdate {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "colorValue", skip_serializing_if = "Option::is_none")]
    color_value: Option<RgbColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    brightness: Option<Brightness>,
    #[serde(rename = "DriveForward", skip_serializing_if = "Option::is_none")]
    drive_forward: Option<bool>,
    #[serde(rename = "DriveBackward", skip_serializing_if = "Option::is_none")]
    drive_backward: Option<bool>,
    #[serde(rename = "FlightMode", skip_serializing_if = "Option::is_none")]
    flight_mode: Option<bool>,
}

impl PartialUpdate {
    fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color_value: None,
            brightness: None,
            drive_forward: None,
            drive_backward: None,
            flight_mode: None,
        }
    }

    /// Update carrying only the color field.
    #[must_use]
    pub fn color(name: impl Into<String>, color: RgbColor) -> Self {
        Self {
            color_value: Some(color),
            ..Self::empty(name)
        }
    }

    /// Update carrying only the brightness field.
    #[must_use]
    pub fn brightness(name: impl Into<String>, brightness: Brightness) -> Self {
        Self {
            brightness: Some(brightness),
            ..Self::empty(name)
        }
    }

    /// Update carrying only the forward drive flag.
    #[must_use]
    pub fn drive_forward(name: impl Into<String>, value: bool) -> Self {
        Self {
            drive_forward: Some(value),
            ..Self::empty(name)
        }
    }

    /// Update carrying only the backward drive flag.
    #[must_use]
    pub fn drive_backward(name: impl Into<String>, value: bool) -> Self {
        Self {
            drive_backward: Some(value),
            ..Self::empty(name)
        }
    }

    /// Update carrying only the flight mode flag.
    #[must_use]
    pub fn flight_mode(name: impl Into<String>, value: bool) -> Self {
        Self {
            flight_mode: Some(value),
            ..Self::empty(name)
        }
    }
}

/// A write containing every carrier field plus the fixed zero translation
/// placeholders the record schema requires.
#[derive(Debug, Clone, Serialize)]
pub struct FullUpdate {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "colorValue")]
    color_value: RgbColor,
    brightness: Brightness,
    #[serde(rename = "transX")]
    trans_x: u8,
    #[serde(rename = "transY")]
    trans_y: u8,
    #[serde(rename = "transZ")]
    trans_z: u8,
    #[serde(rename = "DriveForward")]
    drive_forward: bool,
    #[serde(rename = "DriveBackward")]
    drive_backward: bool,
    #[serde(rename = "FlightMode")]
    flight_mode: bool,
}

impl FullUpdate {
    /// Builds a full-state update for a carrier.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        color_value: RgbColor,
        brightness: Brightness,
        drive_forward: bool,
        drive_backward: bool,
        flight_mode: bool,
    ) -> Self {
        Self {
            name: name.into(),
            color_value,
            brightness,
            trans_x: 0,
            trans_y: 0,
            trans_z: 0,
            drive_forward,
            drive_backward,
            flight_mode,
        }
    }
}
