// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The seam between an accessory and the framework hosting it.

use std::sync::Arc;

use super::{Characteristic, Service};
use crate::error::Result;

/// Produces the current raw value of a characteristic on demand.
pub type ReadHandler = Arc<dyn Fn() -> u8 + Send + Sync>;

/// Applies a raw value written by the framework.
pub type WriteHandler = Arc<dyn Fn(u8) -> Result<()> + Send + Sync>;

/// Accessory framework primitives used by an accessory.
///
/// The framework calls the read handler whenever a controller asks for a
/// value and routes controller writes through the write handler.
/// [`update_value`](Self::update_value) pushes a value to controllers
/// without being asked.
pub trait AccessoryHost: Send + Sync {
    /// Binds handlers to a characteristic of a service.
    ///
    /// Registering the same characteristic twice replaces the earlier
    /// handlers.
    fn register_characteristic(
        &self,
        characteristic: Characteristic,
        service: Service,
        read: ReadHandler,
        write: Option<WriteHandler>,
    );

    /// Pushes a new value to controllers.
    fn update_value(&self, service: Service, characteristic: Characteristic, value: u8);
}
