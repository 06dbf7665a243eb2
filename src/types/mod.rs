// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for carrier control.
//!
//! This module provides type-safe representations of values used in the
//! carrier record. Each type ensures values are within their valid ranges at
//! construction time, preventing runtime errors.
//!
//! # Types
//!
//! - [`RgbColor`] - RGB color in the `rgb(r,g,b)` wire format
//! - [`ChannelValue`] - One channel slot of a partial color update
//! - [`Brightness`] - Brightness level (0-100)
//! - [`Switch`] - Boolean carrier flags (drive directions, flight mode)

mod brightness;
mod channel;
mod rgb_color;
mod switch;

pub use brightness::Brightness;
pub use channel::ChannelValue;
pub use rgb_color::RgbColor;
pub use switch::Switch;
