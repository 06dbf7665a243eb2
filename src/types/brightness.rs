// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Brightness type for carrier light control.
//!
//! This module provides a type-safe representation of brightness values,
//! ensuring values are always within the valid range of 0-100.

use std::fmt;

use crate::error::ValueError;

/// Brightness level as a percentage (0-100).
///
/// The record store uses 0-100 for brightness, where 0 is off and 100 is
/// full brightness.
///
/// # Examples
///
/// ```
/// use lerntraeger_lib::types::Brightness;
///
/// let level = Brightness::new(75).unwrap();
/// assert_eq!(level.value(), 75);
///
/// assert_eq!(Brightness::MIN.value(), 0);
/// assert_eq!(Brightness::MAX.value(), 100);
///
/// assert!(Brightness::new(101).is_err());
/// assert!(Brightness::new(-5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct Brightness(u8);

impl Brightness {
    /// Minimum brightness value (0).
    pub const MIN: Self = Self(0);

    /// Maximum brightness value (100).
    pub const MAX: Self = Self(100);

    /// Creates a new brightness value.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidBrightness`] if the value is outside
    /// [0, 100].
    pub fn new(value: i32) -> Result<Self, ValueError> {
        match u8::try_from(value) {
            Ok(v) if v <= 100 => Ok(Self(v)),
            _ => Err(ValueError::InvalidBrightness(value)),
        }
    }

    /// Returns the brightness value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for Brightness {
    type Error = ValueError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<u8> for Brightness {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i32::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightness_valid_values() {
        for v in 0..=100 {
            let level = Brightness::new(v).unwrap();
            assert_eq!(i32::from(level.value()), v);
        }
    }

    #[test]
    fn brightness_invalid_values() {
        assert_eq!(
            Brightness::new(101),
            Err(ValueError::InvalidBrightness(101))
        );
        assert_eq!(Brightness::new(-1), Err(ValueError::InvalidBrightness(-1)));
    }

    #[test]
    fn brightness_default_is_off() {
        assert_eq!(Brightness::default(), Brightness::MIN);
    }

    #[test]
    fn brightness_display() {
        assert_eq!(Brightness::new(75).unwrap().to_string(), "75");
    }

    #[test]
    fn brightness_ordering() {
        assert!(Brightness::MIN < Brightness::MAX);
        assert!(Brightness::new(50).unwrap() < Brightness::new(75).unwrap());
    }

    #[test]
    fn brightness_serializes_as_number() {
        let json = serde_json::to_value(Brightness::new(42).unwrap()).unwrap();
        assert_eq!(json, serde_json::json!(42));
    }
}
