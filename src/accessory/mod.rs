// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Accessory framework surface.
//!
//! An accessory exposes characteristics grouped in services. It binds a
//! read handler (and optionally a write handler) to each characteristic
//! through an [`AccessoryHost`], and pushes values when its device reports
//! a change.
//!
//! [`CharacteristicRegistry`] is an in-process host that bridges and tests
//! use to drive an accessory without a real framework.

mod characteristic;
mod host;
mod registry;

pub use characteristic::{Characteristic, Service};
pub use host::{AccessoryHost, ReadHandler, WriteHandler};
pub use registry::CharacteristicRegistry;
