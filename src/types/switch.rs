// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Switch type for the carrier's boolean flags.
//!
//! The record store accepts boolean flags either as native booleans or as the
//! exact strings `"true"` and `"false"`. This module closes that loose input
//! into a two-value type at the validation boundary.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// State of a boolean carrier flag (drive directions, flight mode).
///
/// # Examples
///
/// ```
/// use lerntraeger_lib::types::Switch;
///
/// let on: Switch = true.try_into().unwrap();
/// assert!(on.as_bool());
///
/// let off: Switch = "false".parse().unwrap();
/// assert!(!off.as_bool());
///
/// // Only the exact strings "true" and "false" are recognized.
/// assert!("yes".parse::<Switch>().is_err());
/// assert!("True".parse::<Switch>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Switch {
    /// The flag is set.
    On,
    /// The flag is cleared.
    Off,
}

impl Switch {
    /// Returns the flag as a native boolean.
    #[must_use]
    pub const fn as_bool(&self) -> bool {
        matches!(self, Self::On)
    }
}

impl fmt::Display for Switch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => write!(f, "true"),
            Self::Off => write!(f, "false"),
        }
    }
}

impl FromStr for Switch {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "true" => Ok(Self::On),
            "false" => Ok(Self::Off),
            _ => Err(ValueError::InvalidSwitch(s.to_string())),
        }
    }
}

// TryFrom rather than From so every setter input converges on the same
// `TryInto<Switch, Error = ValueError>` bound.
impl TryFrom<bool> for Switch {
    type Error = ValueError;

    fn try_from(value: bool) -> Result<Self, Self::Error> {
        Ok(if value { Self::On } else { Self::Off })
    }
}

impl TryFrom<&str> for Switch {
    type Error = ValueError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for Switch {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
