// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RGB color type in the carrier's `rgb(r,g,b)` wire format.
//!
//! The record store transmits colors as formatted strings in the exact shape
//! `rgb(255,255,255)`. This module provides the typed representation and the
//! strict parser for that grammar.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// RGB color with 8-bit channels (0-255).
///
/// The wire representation is the formatted string `rgb(r,g,b)` with decimal
/// channel values and no whitespace.
///
/// # Examples
///
/// ```
/// use lerntraeger_lib::types::RgbColor;
///
/// let color = RgbColor::new(255, 128, 0);
/// assert_eq!(color.red(), 255);
/// assert_eq!(color.to_string(), "rgb(255,128,0)");
///
/// let parsed: RgbColor = "rgb(10,20,30)".parse().unwrap();
/// assert_eq!(parsed.green(), 20);
///
/// assert!("rgb(256,0,0)".parse::<RgbColor>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl RgbColor {
    /// Creates a new RGB color.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parses a color from the `rgb(r,g,b)` wire format.
    ///
    /// The grammar is strict: the literal prefix `rgb(`, three decimal
    /// channel groups in [0,255] separated by single commas, the literal
    /// suffix `)`. No surrounding or embedded whitespace, no sign characters,
    /// no leading zero on three-digit groups.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidRgbString`] if the string does not match
    /// the grammar.
    pub fn from_rgb_string(value: &str) -> Result<Self, ValueError> {
        let invalid = || ValueError::InvalidRgbString(value.to_string());

        let inner = value
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(invalid)?;

        let mut channels = [0u8; 3];
        let mut groups = inner.split(',');
        for channel in &mut channels {
            let group = groups.next().ok_or_else(invalid)?;
            *channel = parse_channel_group(group).ok_or_else(invalid)?;
        }
        if groups.next().is_some() {
            return Err(invalid());
        }

        Ok(Self::new(channels[0], channels[1], channels[2]))
    }

    /// Returns the red channel.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Returns the green channel.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Returns the blue channel.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Creates a white color, the carrier default.
    #[must_use]
    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }
}

impl Default for RgbColor {
    fn default() -> Self {
        Self::white()
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.red, self.green, self.blue)
    }
}

impl FromStr for RgbColor {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_rgb_string(s)
    }
}

impl TryFrom<&str> for RgbColor {
    type Error = ValueError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_rgb_string(value)
    }
}

impl TryFrom<String> for RgbColor {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_rgb_string(&value)
    }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

impl serde::Serialize for RgbColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// One decimal channel group. Three-digit groups must be 100-255, which also
// rules out leading zeros; one- and two-digit groups cover 0-99.
fn parse_channel_group(group: &str) -> Option<u8> {
    if group.is_empty() || group.len() > 3 || !group.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: u16 = group.parse().ok()?;
    if group.len() == 3 && value < 100 {
        return None;
    }
    u8::try_from(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_new() {
        let color = RgbColor::new(255, 128, 0);
        assert_eq!(color.red(), 255);
        assert_eq!(color.green(), 128);
        assert_eq!(color.blue(), 0);
    }

    #[test]
    fn rgb_parse_valid() {
        let color = RgbColor::from_rgb_string("rgb(1,2,3)").unwrap();
        assert_eq!(color, RgbColor::new(1, 2, 3));

        let color = RgbColor::from_rgb_string("rgb(0,0,0)").unwrap();
        assert_eq!(color, RgbColor::new(0, 0, 0));

        let color = RgbColor::from_rgb_string("rgb(255,255,255)").unwrap();
        assert_eq!(color, RgbColor::white());

        let color = RgbColor::from_rgb_string("rgb(100,199,250)").unwrap();
        assert_eq!(color, RgbColor::new(100, 199, 250));
    }

    #[test]
    fn rgb_parse_two_digit_leading_zero() {
        // The grammar allows a leading zero on one- and two-digit groups.
        let color = RgbColor::from_rgb_string("rgb(01,00,09)").unwrap();
        assert_eq!(color, RgbColor::new(1, 0, 9));
    }

    #[test]
    fn rgb_parse_out_of_range() {
        assert!(RgbColor::from_rgb_string("rgb(256,0,0)").is_err());
        assert!(RgbColor::from_rgb_string("rgb(0,999,0)").is_err());
        assert!(RgbColor::from_rgb_string("rgb(-1,0,0)").is_err());
    }

    #[test]
    fn rgb_parse_malformed() {
        assert!(RgbColor::from_rgb_string("255,255,255").is_err());
        assert!(RgbColor::from_rgb_string("rgb(1,2)").is_err());
        assert!(RgbColor::from_rgb_string("rgb(1,2,3,4)").is_err());
        assert!(RgbColor::from_rgb_string("rgb(1, 2, 3)").is_err());
        assert!(RgbColor::from_rgb_string(" rgb(1,2,3)").is_err());
        assert!(RgbColor::from_rgb_string("rgb(1,2,3) ").is_err());
        assert!(RgbColor::from_rgb_string("rgb(,2,3)").is_err());
        assert!(RgbColor::from_rgb_string("rgb(a,2,3)").is_err());
        assert!(RgbColor::from_rgb_string("").is_err());
    }

    #[test]
    fn rgb_parse_three_digit_leading_zero() {
        assert!(RgbColor::from_rgb_string("rgb(010,0,0)").is_err());
        assert!(RgbColor::from_rgb_string("rgb(001,2,3)").is_err());
    }

    #[test]
    fn rgb_display_roundtrip() {
        let color = RgbColor::new(10, 20, 30);
        assert_eq!(color.to_string(), "rgb(10,20,30)");
        assert_eq!(color.to_string().parse::<RgbColor>().unwrap(), color);
    }

    #[test]
    fn rgb_from_str_error_carries_input() {
        let err = "rgb(1,2)".parse::<RgbColor>().unwrap_err();
        assert_eq!(err, ValueError::InvalidRgbString("rgb(1,2)".to_string()));
    }

    #[test]
    fn rgb_try_from() {
        let color: RgbColor = "rgb(0,255,0)".try_into().unwrap();
        assert_eq!(color, RgbColor::new(0, 255, 0));
    }

    #[test]
    fn rgb_from_tuple() {
        let color: RgbColor = (255u8, 0u8, 0u8).into();
        assert_eq!(color, RgbColor::new(255, 0, 0));
    }

    #[test]
    fn rgb_default_is_white() {
        assert_eq!(RgbColor::default(), RgbColor::white());
    }

    #[test]
    fn rgb_serializes_as_wire_string() {
        let color = RgbColor::new(10, 2, 3);
        let json = serde_json::to_value(color).unwrap();
        assert_eq!(json, serde_json::json!("rgb(10,2,3)"));
    }
}
