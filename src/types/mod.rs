// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for alarm panel state.
//!
//! # Types
//!
//! - [`ArmingMode`] - Vendor arming mode (`all`, `some`, `none`)
//! - [`AlarmState`] - Vendor alarm activity tag (`entry-delay`, `burglar-alarm`, ...)
//! - [`CurrentState`] - Security system current state characteristic value
//! - [`TargetState`] - Security system target state characteristic value
//! - [`ArmTarget`] - Target reachable through vendor commands

mod alarm_state;
mod arming_mode;
mod security_state;

pub use alarm_state::AlarmState;
pub use arming_mode::ArmingMode;
pub use security_state::{ArmTarget, CurrentState, TargetState};
