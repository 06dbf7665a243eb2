// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level carrier model.
//!
//! A [`Lerntraeger`] mirrors one remote carrier record in memory. Setters
//! validate their input, mutate the local mirror, and push the single changed
//! field to the record store as a detached task. The setter itself returns
//! once the local mutation is done; the outcome of the push surfaces only as
//! diagnostic log output.
//!
//! # Synchronization model
//!
//! Pushes are issued in the order the setters were called, but nothing
//! sequences their completion, so the record store can observe concurrently
//! in-flight updates out of order. Local and remote state may be transiently
//! inconsistent; a failed push is never rolled back.
//!
//! ```no_run
//! use lerntraeger_lib::Lerntraeger;
//!
//! #[tokio::main]
//! async fn main() -> lerntraeger_lib::Result<()> {
//!     // Builds with defaults and spawns the initial snapshot refresh.
//!     let carrier = Lerntraeger::builder("Alpha").build()?;
//!
//!     carrier.set_color(Some(255), Some(128), Some(0))?;
//!     carrier.set_brightness(Some(75))?;
//!     carrier.set_drive_forward(Some(true))?;
//!
//!     Ok(())
//! }
//! ```

mod builder;

pub use builder::LerntraegerBuilder;

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{Error, ProtocolError, Result, ValueError};
use crate::protocol::HttpClient;
use crate::record::{FullUpdate, PartialUpdate, Snapshot};
use crate::state::CarrierState;
use crate::types::{Brightness, ChannelValue, RgbColor, Switch};

/// Fixed suffix appended to the carrier name to form the display name that
/// keys the remote record.
pub const NAME_SUFFIX: &str = "Lernträger";

/// A remote-controlled learning carrier, mirrored locally and synchronized
/// with its record in the store.
///
/// Cloning yields a handle to the same carrier; clones share the local state
/// mirror and connection pool.
///
/// # Runtime
///
/// Setters spawn their push tasks on the ambient tokio runtime and therefore
/// must be called from within one.
#[derive(Debug, Clone)]
pub struct Lerntraeger {
    name: String,
    display_name: String,
    client: HttpClient,
    state: Arc<RwLock<CarrierState>>,
}

impl Lerntraeger {
    /// Creates a builder for a carrier with the given name.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use lerntraeger_lib::Lerntraeger;
    ///
    /// # fn example() -> lerntraeger_lib::Result<()> {
    /// let carrier = Lerntraeger::builder("Alpha").build()?;
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn builder(name: impl Into<String>) -> LerntraegerBuilder {
        LerntraegerBuilder::new(name.into())
    }

    pub(crate) fn new(name: String, client: HttpClient) -> Self {
        let display_name = format!("{name} {NAME_SUFFIX}");
        Self {
            name,
            display_name,
            client,
            state: Arc::new(RwLock::new(CarrierState::new())),
        }
    }

    /// Returns the carrier name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the display name keying the remote record
    /// (`"<name> Lernträger"`).
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns a snapshot of the current local state.
    #[must_use]
    pub fn state(&self) -> CarrierState {
        self.state.read().clone()
    }

    /// Returns the current color value.
    #[must_use]
    pub fn color_value(&self) -> RgbColor {
        self.state.read().color_value()
    }

    /// Returns the current brightness level.
    #[must_use]
    pub fn brightness(&self) -> Brightness {
        self.state.read().brightness()
    }

    /// Returns the forward drive flag.
    #[must_use]
    pub fn drive_forward(&self) -> bool {
        self.state.read().drive_forward()
    }

    /// Returns the backward drive flag.
    #[must_use]
    pub fn drive_backward(&self) -> bool {
        self.state.read().drive_backward()
    }

    /// Returns the flight mode flag.
    #[must_use]
    pub fn flight_mode(&self) -> bool {
        self.state.read().flight_mode()
    }

    // ========== Synchronization ==========

    /// Fetches the remote record and overwrites all five local fields with
    /// the fetched values.
    ///
    /// The fetched values are routed through the same per-field setters used
    /// for local mutation, so they are re-validated on the way in, and each
    /// pushing setter re-sends the just-fetched value to the store. The
    /// color value takes the local-only string setter and is not re-pushed.
    ///
    /// # Errors
    ///
    /// Returns error if the fetch fails, the snapshot cannot be parsed, or a
    /// fetched value fails validation. Fields already applied before the
    /// failing one keep their fetched values.
    pub async fn refresh_all(&self) -> Result<()> {
        let body = self.client.fetch_record(&self.display_name).await?;
        let snapshot: Snapshot = serde_json::from_str(&body)?;

        self.set_color_from_string(Some(snapshot.color_value.as_str()))?;
        self.set_brightness(Some(snapshot.brightness))?;
        self.set_drive_forward(Some(snapshot.drive_forward))?;
        self.set_drive_backward(Some(snapshot.drive_backward))?;
        self.set_flight_mode(Some(snapshot.flight_mode))?;

        Ok(())
    }

    /// Pushes the complete local state to the remote record as one update,
    /// including the fixed zero translation placeholders.
    ///
    /// A rejection by the store is logged and discarded, matching the
    /// per-field push behavior.
    ///
    /// # Errors
    ///
    /// Returns error only if the request itself fails (connection, timeout).
    pub async fn push_all(&self) -> Result<()> {
        let update = {
            let state = self.state.read();
            FullUpdate::new(
                &self.display_name,
                state.color_value(),
                state.brightness(),
                state.drive_forward(),
                state.drive_backward(),
                state.flight_mode(),
            )
        };

        match self.client.patch_record(&self.display_name, &update).await {
            Ok(()) => Ok(()),
            Err(err @ ProtocolError::RemoteRejected { .. }) => {
                tracing::error!(error = %err, update = ?update, "record store rejected full update");
                Ok(())
            }
            Err(err) => Err(Error::Protocol(err)),
        }
    }

    // ========== Setters ==========

    /// Sets the color from three channel slots.
    ///
    /// If any argument is `None` the whole call is a silent no-op. A slot
    /// converting to [`ChannelValue::Keep`] (e.g. the empty string) retains
    /// the previously stored channel. On success the local color is updated
    /// and a color-only partial update is pushed.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidChannel`] if a provided value is outside
    /// [0, 255]; local state is left unmodified.
    pub fn set_color<R, G, B>(
        &self,
        red: Option<R>,
        green: Option<G>,
        blue: Option<B>,
    ) -> Result<()>
    where
        R: TryInto<ChannelValue, Error = ValueError>,
        G: TryInto<ChannelValue, Error = ValueError>,
        B: TryInto<ChannelValue, Error = ValueError>,
    {
        let (Some(red), Some(green), Some(blue)) = (red, green, blue) else {
            return Ok(());
        };
        let (red, green, blue) = (red.try_into()?, green.try_into()?, blue.try_into()?);

        let color = {
            let mut state = self.state.write();
            let current = state.color_value();
            let color = RgbColor::new(
                red.resolve(current.red()),
                green.resolve(current.green()),
                blue.resolve(current.blue()),
            );
            state.set_color_value(color);
            color
        };

        self.spawn_push(PartialUpdate::color(&self.display_name, color));
        Ok(())
    }

    /// Sets the color from a pre-formatted `rgb(r,g,b)` string.
    ///
    /// Local-only: unlike the other setters this does not push to the remote
    /// record. Used for initialization and for applying fetched snapshots.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidRgbString`] if the string does not match
    /// the grammar.
    pub fn set_color_from_string<S>(&self, value: Option<S>) -> Result<()>
    where
        S: TryInto<RgbColor, Error = ValueError>,
    {
        let Some(value) = value else {
            return Ok(());
        };
        let color = value.try_into()?;
        self.state.write().set_color_value(color);
        Ok(())
    }

    /// Sets the brightness level.
    ///
    /// No-op on `None`. On success the local level is updated and a
    /// brightness-only partial update is pushed.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidBrightness`] if the value is outside
    /// [0, 100]; local state is left unmodified.
    pub fn set_brightness<V>(&self, value: Option<V>) -> Result<()>
    where
        V: TryInto<Brightness, Error = ValueError>,
    {
        let Some(value) = value else {
            return Ok(());
        };
        let brightness = value.try_into()?;
        self.state.write().set_brightness(brightness);
        self.spawn_push(PartialUpdate::brightness(&self.display_name, brightness));
        Ok(())
    }

    /// Sets the forward drive flag.
    ///
    /// Accepts a native boolean or the exact strings `"true"`/`"false"`.
    /// No-op on `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidSwitch`] for any other value; local
    /// state is left unmodified.
    pub fn set_drive_forward<V>(&self, value: Option<V>) -> Result<()>
    where
        V: TryInto<Switch, Error = ValueError>,
    {
        let Some(value) = value else {
            return Ok(());
        };
        let switch: Switch = value.try_into()?;
        self.state.write().set_drive_forward(switch.as_bool());
        self.spawn_push(PartialUpdate::drive_forward(
            &self.display_name,
            switch.as_bool(),
        ));
        Ok(())
    }

    /// Sets the backward drive flag.
    ///
    /// Accepts the same inputs as [`set_drive_forward`](Self::set_drive_forward).
    /// The two drive directions are independent; setting one never clears
    /// the other.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidSwitch`] for non-boolean input.
    pub fn set_drive_backward<V>(&self, value: Option<V>) -> Result<()>
    where
        V: TryInto<Switch, Error = ValueError>,
    {
        let Some(value) = value else {
            return Ok(());
        };
        let switch: Switch = value.try_into()?;
        self.state.write().set_drive_backward(switch.as_bool());
        self.spawn_push(PartialUpdate::drive_backward(
            &self.display_name,
            switch.as_bool(),
        ));
        Ok(())
    }

    /// Sets the flight mode flag.
    ///
    /// No-op on `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidSwitch`] for non-boolean input.
    pub fn set_flight_mode<V>(&self, value: Option<V>) -> Result<()>
    where
        V: TryInto<Switch, Error = ValueError>,
    {
        let Some(value) = value else {
            return Ok(());
        };
        let switch: Switch = value.try_into()?;
        self.state.write().set_flight_mode(switch.as_bool());
        self.spawn_push(PartialUpdate::flight_mode(
            &self.display_name,
            switch.as_bool(),
        ));
        Ok(())
    }

    // ========== Helpers ==========

    // Fire-and-forget: the task owns its clones, failures are reported as
    // diagnostics only.
    fn spawn_push(&self, update: PartialUpdate) {
        let client = self.client.clone();
        let display_name = self.display_name.clone();
        tokio::spawn(async move {
            if let Err(err) = client.patch_record(&display_name, &update).await {
                tracing::error!(error = %err, update = ?update, "failed to apply partial update");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::HttpConfig;

    // Pushes spawned against this address fail fast; the tests here cover
    // local semantics only.
    fn carrier(name: &str) -> Lerntraeger {
        Lerntraeger::builder(name)
            .with_config(HttpConfig::new().with_base_url("http://127.0.0.1:9/records"))
            .build_without_refresh()
            .unwrap()
    }

    #[tokio::test]
    async fn defaults_before_refresh() {
        let carrier = carrier("Alpha");
        assert_eq!(carrier.name(), "Alpha");
        assert_eq!(carrier.display_name(), "Alpha Lernträger");
        assert_eq!(carrier.color_value(), RgbColor::white());
        assert_eq!(carrier.brightness(), Brightness::MIN);
        assert!(!carrier.drive_forward());
        assert!(!carrier.drive_backward());
        assert!(!carrier.flight_mode());
    }

    #[tokio::test]
    async fn set_color_full() {
        let carrier = carrier("Alpha");
        carrier.set_color(Some(10), Some(20), Some(30)).unwrap();
        assert_eq!(carrier.color_value(), RgbColor::new(10, 20, 30));
        assert_eq!(carrier.color_value().to_string(), "rgb(10,20,30)");
    }

    #[tokio::test]
    async fn set_color_zero_is_a_value() {
        let carrier = carrier("Alpha");
        carrier.set_color(Some(0), Some(0), Some(0)).unwrap();
        assert_eq!(carrier.color_value(), RgbColor::new(0, 0, 0));
    }

    #[tokio::test]
    async fn set_color_empty_channels_retain_previous() {
        let carrier = carrier("Alpha");
        carrier
            .set_color_from_string(Some("rgb(1,2,3)"))
            .unwrap();
        carrier.set_color(Some(10), Some(""), Some("")).unwrap();
        assert_eq!(carrier.color_value(), RgbColor::new(10, 2, 3));
    }

    #[tokio::test]
    async fn set_color_missing_argument_is_a_noop() {
        let carrier = carrier("Alpha");
        carrier
            .set_color(None::<i32>, Some(20), Some(30))
            .unwrap();
        assert_eq!(carrier.color_value(), RgbColor::white());
    }

    #[tokio::test]
    async fn set_color_out_of_range_leaves_state() {
        let carrier = carrier("Alpha");
        let err = carrier.set_color(Some(256), Some(0), Some(0)).unwrap_err();
        assert!(matches!(err, Error::Value(ValueError::InvalidChannel(_))));
        assert_eq!(carrier.color_value(), RgbColor::white());
    }

    #[tokio::test]
    async fn set_color_from_string_valid() {
        let carrier = carrier("Alpha");
        carrier.set_color_from_string(Some("rgb(1,2,3)")).unwrap();
        assert_eq!(carrier.color_value().to_string(), "rgb(1,2,3)");
    }

    #[tokio::test]
    async fn set_color_from_string_invalid_inputs() {
        let carrier = carrier("Alpha");
        for s in ["rgb(256,0,0)", "rgb(-1,0,0)", "255,255,255", "rgb(1,2)"] {
            let err = carrier.set_color_from_string(Some(s)).unwrap_err();
            assert!(matches!(err, Error::Value(ValueError::InvalidRgbString(_))));
        }
        assert_eq!(carrier.color_value(), RgbColor::white());
    }

    #[tokio::test]
    async fn set_brightness_range() {
        let carrier = carrier("Alpha");
        carrier.set_brightness(Some(100)).unwrap();
        assert_eq!(carrier.brightness().value(), 100);

        let err = carrier.set_brightness(Some(101)).unwrap_err();
        assert!(matches!(
            err,
            Error::Value(ValueError::InvalidBrightness(101))
        ));
        assert_eq!(carrier.brightness().value(), 100);

        assert!(carrier.set_brightness(Some(-1)).is_err());
    }

    #[tokio::test]
    async fn set_brightness_missing_is_a_noop() {
        let carrier = carrier("Alpha");
        carrier.set_brightness(None::<i32>).unwrap();
        assert_eq!(carrier.brightness(), Brightness::MIN);
    }

    #[tokio::test]
    async fn flag_setters_accept_bool_and_exact_strings() {
        let carrier = carrier("Alpha");
        carrier.set_drive_forward(Some(true)).unwrap();
        assert!(carrier.drive_forward());

        carrier.set_drive_forward(Some("false")).unwrap();
        assert!(!carrier.drive_forward());

        carrier.set_flight_mode(Some("true")).unwrap();
        assert!(carrier.flight_mode());
    }

    #[tokio::test]
    async fn flag_setters_reject_loose_strings() {
        let carrier = carrier("Alpha");
        let err = carrier.set_drive_forward(Some("yes")).unwrap_err();
        assert!(matches!(err, Error::Value(ValueError::InvalidSwitch(_))));
        assert!(!carrier.drive_forward());
    }

    #[tokio::test]
    async fn both_drive_directions_may_be_set() {
        let carrier = carrier("Alpha");
        carrier.set_drive_forward(Some(true)).unwrap();
        carrier.set_drive_backward(Some(true)).unwrap();
        assert!(carrier.drive_forward() && carrier.drive_backward());
    }

    #[tokio::test]
    async fn clones_share_state() {
        let carrier = carrier("Alpha");
        let handle = carrier.clone();
        handle.set_brightness(Some(42)).unwrap();
        assert_eq!(carrier.brightness().value(), 42);
    }
}
