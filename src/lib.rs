// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Alarm Panel HAP - expose cloud alarm panels as security system accessories.
//!
//! This library adapts an alarm base station reachable through a vendor
//! API to the security system service of a home-automation accessory
//! framework. Vendor snapshots (arming mode plus optional alarm activity)
//! become the current and target state characteristics; target state
//! writes become arm-away, arm-home and disarm commands.
//!
//! # Building Blocks
//!
//! - [`AlarmDevice`]: implemented by the vendor client for each base station
//! - [`AccessoryHost`](accessory::AccessoryHost): implemented by the framework
//!   bridge; [`CharacteristicRegistry`](accessory::CharacteristicRegistry) is
//!   an in-process implementation
//! - [`SecurityPanel`]: the adapter between the two
//! - [`PanelConfig`]: whether an entry delay counts as a triggered alarm
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use alarm_panel_hap::{PanelConfig, SecurityPanel};
//! use alarm_panel_hap::accessory::{Characteristic, CharacteristicRegistry};
//! use alarm_panel_hap::subscription::Subscribable;
//!
//! #[tokio::main]
//! async fn main() -> alarm_panel_hap::Result<()> {
//!     let config = PanelConfig::from_json(r#"{"alarmOnEntryDelay": true}"#)?;
//!     let host = Arc::new(CharacteristicRegistry::new());
//!
//!     // `base_station` comes from the vendor client
//!     let panel = SecurityPanel::new(Arc::new(base_station), &host, config)?;
//!     let _listener = panel.start();
//!
//!     host.on_value_updated(|_, characteristic, value| {
//!         println!("{characteristic} -> {value}");
//!     });
//!
//!     // A controller asks to arm away
//!     host.write(Characteristic::SecuritySystemTargetState, 1)?;
//!     Ok(())
//! }
//! ```

pub mod accessory;
pub mod command;
mod config;
mod device;
pub mod error;
pub mod event;
mod panel;
pub mod state;
pub mod subscription;
pub mod types;

pub use command::AlarmCommand;
pub use config::PanelConfig;
pub use device::AlarmDevice;
pub use error::{CommandError, ConfigError, Error, Result, ValueError};
pub use panel::{NIGHT_MODE_CORRECTION_DELAY, SecurityPanel, current_state};
pub use state::{AlarmDeviceData, AlarmDeviceState, AlarmInfo};
pub use subscription::{CallbackRegistry, Subscribable, SubscriptionId};
pub use types::{AlarmState, ArmTarget, ArmingMode, CurrentState, TargetState};
