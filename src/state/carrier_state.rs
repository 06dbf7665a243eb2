// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Carrier state tracking.

use crate::types::{Brightness, RgbColor};

/// Tracked state of a carrier.
///
/// Holds the five synchronized fields. A fresh state carries the fixed
/// defaults a carrier starts with before the initial snapshot arrives:
/// white color, brightness 0, all flags cleared.
///
/// The two drive directions are independent; nothing prevents both being set
/// at the same time.
///
/// # Examples
///
/// ```
/// use lerntraeger_lib::state::CarrierState;
/// use lerntraeger_lib::types::RgbColor;
///
/// let state = CarrierState::new();
/// assert_eq!(state.color_value(), RgbColor::white());
/// assert_eq!(state.brightness().value(), 0);
/// assert!(!state.flight_mode());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarrierState {
    color_value: RgbColor,
    brightness: Brightness,
    drive_forward: bool,
    drive_backward: bool,
    flight_mode: bool,
}

impl CarrierState {
    /// Creates a state holding the carrier defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the color value.
    #[must_use]
    pub fn color_value(&self) -> RgbColor {
        self.color_value
    }

    /// Sets the color value.
    pub fn set_color_value(&mut self, color: RgbColor) {
        self.color_value = color;
    }

    /// Gets the brightness level.
    #[must_use]
    pub fn brightness(&self) -> Brightness {
        self.brightness
    }

    /// Sets the brightness level.
    pub fn set_brightness(&mut self, value: Brightness) {
        self.brightness = value;
    }

    /// Gets the forward drive flag.
    #[must_use]
    pub fn drive_forward(&self) -> bool {
        self.drive_forward
    }

    /// Sets the forward drive flag.
    pub fn set_drive_forward(&mut self, value: bool) {
        self.drive_forward = value;
    }

    /// Gets the backward drive flag.
    #[must_use]
    pub fn drive_backward(&self) -> bool {
        self.drive_backward
    }

    /// Sets the backward drive flag.
    pub fn set_drive_backward(&mut self, value: bool) {
        self.drive_backward = value;
    }

    /// Gets the flight mode flag.
    #[must_use]
    pub fn flight_mode(&self) -> bool {
        self.flight_mode
    }

    /// Sets the flight mode flag.
    pub fn set_flight_mode(&mut self, value: bool) {
        self.flight_mode = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_defaults() {
        let state = CarrierState::new();
        assert_eq!(state.color_value(), RgbColor::white());
        assert_eq!(state.brightness(), Brightness::MIN);
        assert!(!state.drive_forward());
        assert!(!state.drive_backward());
        assert!(!state.flight_mode());
    }

    #[test]
    fn state_field_updates() {
        let mut state = CarrierState::new();
        state.set_color_value(RgbColor::new(1, 2, 3));
        state.set_brightness(Brightness::new(50).unwrap());
        state.set_drive_forward(true);
        state.set_flight_mode(true);

        assert_eq!(state.color_value(), RgbColor::new(1, 2, 3));
        assert_eq!(state.brightness().value(), 50);
        assert!(state.drive_forward());
        assert!(!state.drive_backward());
        assert!(state.flight_mode());
    }

    #[test]
    fn drive_directions_are_independent() {
        let mut state = CarrierState::new();
        state.set_drive_forward(true);
        state.set_drive_backward(true);
        assert!(state.drive_forward() && state.drive_backward());
    }
}
