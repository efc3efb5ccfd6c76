// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Snapshot delivery.
//!
//! [`DeviceDataBus`] broadcasts device snapshots to any number of
//! subscribers. [`ModeFilter`] suppresses consecutive snapshots that carry
//! the same arming mode.
//!
//! # Examples
//!
//! ```
//! use alarm_panel_hap::event::{DeviceDataBus, ModeFilter};
//! use alarm_panel_hap::state::AlarmDeviceData;
//! use alarm_panel_hap::types::ArmingMode;
//!
//! let bus = DeviceDataBus::new();
//! let mut rx = bus.subscribe();
//! let mut filter = ModeFilter::new();
//!
//! bus.publish(AlarmDeviceData::new(ArmingMode::Away));
//! let data = rx.try_recv().unwrap();
//! assert!(filter.is_distinct(&data));
//! ```

mod event_bus;
mod mode_filter;

pub use event_bus::DeviceDataBus;
pub use mode_filter::ModeFilter;
