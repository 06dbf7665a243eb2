// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Channel slot type for partial color updates.

use crate::error::ValueError;

/// One channel slot in a partial color update.
///
/// [`Lerntraeger::set_color`](crate::Lerntraeger::set_color) accepts a slot
/// per channel, so a single channel can be replaced while the others retain
/// their previously stored values. The empty string converts to [`Keep`],
/// matching the record store's convention for an omitted channel.
///
/// [`Keep`]: ChannelValue::Keep
///
/// # Examples
///
/// ```
/// use lerntraeger_lib::types::ChannelValue;
///
/// let set: ChannelValue = 128.try_into().unwrap();
/// assert_eq!(set.resolve(7), 128);
///
/// let keep: ChannelValue = "".try_into().unwrap();
/// assert_eq!(keep.resolve(7), 7);
///
/// assert!(ChannelValue::try_from(300).is_err());
/// assert!(ChannelValue::try_from(-1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelValue {
    /// Keep the previously stored channel value.
    Keep,
    /// Replace the channel with a new value.
    Set(u8),
}

impl ChannelValue {
    /// Resolves the slot against the currently stored channel value.
    #[must_use]
    pub const fn resolve(&self, current: u8) -> u8 {
        match self {
            Self::Keep => current,
            Self::Set(value) => *value,
        }
    }
}

impl TryFrom<i32> for ChannelValue {
    type Error = ValueError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map(Self::Set)
            .map_err(|_| ValueError::InvalidChannel(value.to_string()))
    }
}

impl TryFrom<&str> for ChannelValue {
    type Error = ValueError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Ok(Self::Keep);
        }
        let parsed: i32 = value
            .parse()
            .map_err(|_| ValueError::InvalidChannel(value.to_string()))?;
        parsed.try_into()
    }
}

impl TryFrom<String> for ChannelValue {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.as_str().try_into()
    }
}
