// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Vendor alarm device abstraction.
//!
//! A vendor client implements [`AlarmDevice`] for each alarm base station
//! it discovers. The usual way to back the state half of the trait is an
//! embedded [`AlarmDeviceState`](crate::state::AlarmDeviceState):
//!
//! ```
//! use std::future::{Future, ready};
//! use alarm_panel_hap::AlarmDevice;
//! use alarm_panel_hap::error::CommandError;
//! use alarm_panel_hap::state::{AlarmDeviceData, AlarmDeviceState};
//! use tokio::sync::broadcast;
//!
//! struct BaseStation {
//!     name: String,
//!     state: AlarmDeviceState,
//! }
//!
//! impl AlarmDevice for BaseStation {
//!     fn name(&self) -> &str {
//!         &self.name
//!     }
//!
//!     fn data(&self) -> AlarmDeviceData {
//!         self.state.snapshot()
//!     }
//!
//!     fn subscribe(&self) -> broadcast::Receiver<AlarmDeviceData> {
//!         self.state.subscribe()
//!     }
//!
//!     fn arm_away(&self) -> impl Future<Output = Result<(), CommandError>> + Send {
//!         ready(Ok(()))
//!     }
//!
//!     fn arm_home(&self) -> impl Future<Output = Result<(), CommandError>> + Send {
//!         ready(Ok(()))
//!     }
//!
//!     fn disarm(&self) -> impl Future<Output = Result<(), CommandError>> + Send {
//!         ready(Ok(()))
//!     }
//! }
//! ```

use std::future::Future;

use tokio::sync::broadcast;

use crate::error::CommandError;
use crate::state::AlarmDeviceData;

/// An alarm base station reachable through a vendor API.
///
/// The state half (`data`, `subscribe`) must be cheap and non-blocking.
/// The command half returns `Send` futures so callers can dispatch them
/// on a detached task.
pub trait AlarmDevice: Send + Sync + 'static {
    /// Human-readable device name.
    fn name(&self) -> &str;

    /// Returns the latest known snapshot.
    fn data(&self) -> AlarmDeviceData;

    /// Subscribes to snapshots delivered after this call.
    fn subscribe(&self) -> broadcast::Receiver<AlarmDeviceData>;

    /// Arms every sensor.
    fn arm_away(&self) -> impl Future<Output = Result<(), CommandError>> + Send;

    /// Arms the perimeter only.
    fn arm_home(&self) -> impl Future<Output = Result<(), CommandError>> + Send;

    /// Disarms the system.
    fn disarm(&self) -> impl Future<Output = Result<(), CommandError>> + Send;
}
