// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Alarm device state types.
//!
//! [`AlarmDeviceData`] is one immutable snapshot reported by the vendor.
//! [`AlarmDeviceState`] keeps the latest snapshot and broadcasts new ones.
//!
//! # Examples
//!
//! ```
//! use alarm_panel_hap::state::AlarmDeviceData;
//! use alarm_panel_hap::types::{AlarmState, ArmingMode};
//!
//! let data = AlarmDeviceData::new(ArmingMode::Away).with_alarm(AlarmState::BurglarAlarm);
//! assert_eq!(data.alarm_state(), Some(&AlarmState::BurglarAlarm));
//! ```

mod device_data;
mod device_state;

pub use device_data::{AlarmDeviceData, AlarmInfo};
pub use device_state::AlarmDeviceState;
