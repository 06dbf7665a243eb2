// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wire payloads for the carrier record store.
//!
//! [`Snapshot`] is the record as read; [`PartialUpdate`] and [`FullUpdate`]
//! are the two write shapes. Read and write payloads name the boolean flags
//! differently (camelCase vs. PascalCase); both forms are preserved verbatim
//! for wire compatibility.

mod snapshot;
mod update;

pub use snapshot::Snapshot;
pub use update::{FullUpdate, PartialUpdate};
