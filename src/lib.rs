// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lernträger Lib - A Rust library to control learning-carrier devices.
//!
//! A [`Lerntraeger`] is an in-memory mirror of one remote carrier record,
//! addressed by the carrier's name in an HTTP record store. Setters validate
//! their input, mutate the local mirror, and push the changed field to the
//! store as a fire-and-forget task.
//!
//! # Supported Features
//!
//! - **Color control**: RGB color in the store's `rgb(r,g,b)` format,
//!   including partial per-channel updates
//! - **Brightness control**: 0-100 levels
//! - **Drive control**: independent forward/backward flags
//! - **Flight mode**: on/off
//! - **Synchronization**: snapshot refresh and full-state push
//!
//! # Quick Start
//!
//! ```no_run
//! use lerntraeger_lib::Lerntraeger;
//!
//! #[tokio::main]
//! async fn main() -> lerntraeger_lib::Result<()> {
//!     // Builds with defaults; the current record state is fetched in the
//!     // background and applied once it arrives.
//!     let carrier = Lerntraeger::builder("Alpha").build()?;
//!
//!     // Validated locally, pushed to the record store asynchronously.
//!     carrier.set_color(Some(255), Some(128), Some(0))?;
//!     carrier.set_brightness(Some(75))?;
//!     carrier.set_drive_forward(Some(true))?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Explicit synchronization
//!
//! ```no_run
//! use lerntraeger_lib::Lerntraeger;
//!
//! #[tokio::main]
//! async fn main() -> lerntraeger_lib::Result<()> {
//!     let carrier = Lerntraeger::builder("Alpha").build_without_refresh()?;
//!
//!     // Pull the remote record into the local mirror.
//!     carrier.refresh_all().await?;
//!
//!     // Push the complete local state as one update.
//!     carrier.push_all().await?;
//!
//!     Ok(())
//! }
//! ```

mod carrier;
pub mod error;
pub mod protocol;
pub mod record;
pub mod state;
pub mod types;

pub use carrier::{Lerntraeger, LerntraegerBuilder, NAME_SUFFIX};
pub use error::{Error, ProtocolError, Result, ValueError};
pub use protocol::{HttpClient, HttpConfig};
pub use record::{FullUpdate, PartialUpdate, Snapshot};
pub use state::CarrierState;
pub use types::{Brightness, ChannelValue, RgbColor, Switch};
